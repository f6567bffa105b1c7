use super::Avatar;
use bughive_app::domain::{LeaderboardEntry, LeaderboardPeriod};
use leptos::prelude::*;

fn rank_icon(rank: u32) -> &'static str {
    match rank {
        1 => "👑",
        2 => "🏆",
        3 => "🥉",
        _ => "🎖",
    }
}

#[component]
pub fn LeaderboardCard(
    entries: Vec<LeaderboardEntry>,
    #[prop(into)] title: String,
    period: LeaderboardPeriod,
) -> impl IntoView {
    let empty_hint = match period {
        LeaderboardPeriod::Weekly => "No contributors yet this week",
        LeaderboardPeriod::AllTime => "No contributors yet this period",
    };

    view! {
        <section class="card leaderboard">
            <header class="card__header">
                <h2 class="card__title">"🏆 " {title}</h2>
                <span class="badge badge--outline">{period.label()}</span>
            </header>
            {if entries.is_empty() {
                view! {
                    <div class="empty">
                        <p>{empty_hint}</p>
                        <p class="empty__hint">"Be the first to earn points!"</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <ol class="leaderboard__list">
                        {entries.into_iter().map(|entry| {
                            let hidden = entry.hidden_badge_count();
                            let badges = entry.visible_badges().to_vec();
                            let item_class = if entry.is_podium() {
                                "leaderboard__item leaderboard__item--podium"
                            } else {
                                "leaderboard__item"
                            };
                            view! {
                                <li class=item_class>
                                    <span class="leaderboard__rank">
                                        {rank_icon(entry.rank)} " #" {entry.rank}
                                    </span>
                                    <Avatar name=entry.name.clone() src=entry.avatar.clone().unwrap_or_default()/>
                                    <div class="leaderboard__info">
                                        <span class="leaderboard__name">{entry.name.clone()}</span>
                                        <span class="leaderboard__contributions">
                                            {entry.contributions.bugs_reported} " bugs · "
                                            {entry.contributions.bugs_verified} " verified · "
                                            {entry.contributions.votes_given} " votes"
                                        </span>
                                    </div>
                                    <div class="leaderboard__points">
                                        <strong>{entry.display_points(period)}</strong>
                                        <span>{period.points_caption()}</span>
                                    </div>
                                    <div class="leaderboard__badges">
                                        {badges.into_iter().map(|badge| view! {
                                            <span
                                                class=format!("badge-icon badge-icon--{}", badge.rarity.as_str())
                                                title=badge.name
                                            >
                                                {badge.icon}
                                            </span>
                                        }).collect::<Vec<_>>()}
                                        {(hidden > 0).then(|| view! {
                                            <span class="leaderboard__more">"+" {hidden}</span>
                                        })}
                                    </div>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ol>
                }.into_any()
            }}
        </section>
    }
}
