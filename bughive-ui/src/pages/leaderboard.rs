use crate::components::{server_error_message, Avatar, ErrorDisplay, LeaderboardCard, LoadingSpinner};
use bughive_app::domain::{Leaderboard, LeaderboardPeriod};
use leptos::prelude::*;
use server_fn::ServerFnError;

#[server(GetLeaderboardFn, "/api", endpoint = "leaderboard")]
pub async fn get_leaderboard() -> Result<Leaderboard, ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.leaderboard.as_ref().clone())
}

fn spotlight_class(index: usize) -> &'static str {
    match index {
        0 => "card spotlight spotlight--first",
        1 => "card spotlight spotlight--second",
        _ => "card spotlight",
    }
}

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let leaderboard = Resource::new(|| (), |_| get_leaderboard());
    let period = RwSignal::new(LeaderboardPeriod::Weekly);

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">"Leaderboard"</h1>
                <p class="page-header__subtitle">"Top contributors in the BugHive community"</p>
            </div>
            <span class="badge badge--gaming">"🏆 Season 1"</span>
        </header>

        <Suspense fallback=move || view! { <LoadingSpinner message="Loading leaderboard..."/> }>
            {move || {
                leaderboard.get().map(|result| match result {
                    Ok(board) => view! { <LeaderboardView board=board period=period/> }.into_any(),
                    Err(e) => view! {
                        <ErrorDisplay
                            message=server_error_message(&e)
                            on_retry=Callback::new(move |_| leaderboard.refetch())
                        />
                    }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn LeaderboardView(board: Leaderboard, period: RwSignal<LeaderboardPeriod>) -> impl IntoView {
    let weekly = board.entries(LeaderboardPeriod::Weekly);
    let contributors = weekly.len();
    let points_awarded: u32 = weekly.iter().map(|e| e.weekly_points).sum();
    let bugs_reported: u32 = weekly.iter().map(|e| e.contributions.bugs_reported).sum();
    let bugs_verified: u32 = weekly.iter().map(|e| e.contributions.bugs_verified).sum();
    let spotlight = board.spotlight().to_vec();

    let tab_class = move |tab: LeaderboardPeriod| {
        if period.get() == tab {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="spotlight-grid">
            {spotlight.into_iter().enumerate().map(|(index, entry)| view! {
                <article class=spotlight_class(index)>
                    <Avatar name=entry.name.clone() src=entry.avatar.clone().unwrap_or_default() large=true/>
                    <h3 class="spotlight__name">{entry.name.clone()}</h3>
                    <span class="badge badge--outline">"Rank #" {entry.rank}</span>
                    <p class="spotlight__points">{entry.weekly_points}</p>
                    <p class="spotlight__caption">"Points This Week"</p>
                    <div class="spotlight__stats">
                        <span><strong>{entry.contributions.bugs_reported}</strong>" Bugs"</span>
                        <span><strong>{entry.contributions.bugs_verified}</strong>" Verified"</span>
                        <span><strong>{entry.contributions.votes_given}</strong>" Votes"</span>
                    </div>
                </article>
            }).collect::<Vec<_>>()}
        </div>

        <div class="stat-grid">
            <div class="card stat"><strong>{contributors}</strong><span>"Active Contributors"</span></div>
            <div class="card stat"><strong>{points_awarded}</strong><span>"Points Awarded"</span></div>
            <div class="card stat"><strong>{bugs_reported}</strong><span>"Bugs Reported"</span></div>
            <div class="card stat"><strong>{bugs_verified}</strong><span>"Bugs Verified"</span></div>
        </div>

        <div class="tabs">
            <button class=move || tab_class(LeaderboardPeriod::Weekly) on:click=move |_| period.set(LeaderboardPeriod::Weekly)>
                {LeaderboardPeriod::Weekly.label()}
            </button>
            <button class=move || tab_class(LeaderboardPeriod::AllTime) on:click=move |_| period.set(LeaderboardPeriod::AllTime)>
                {LeaderboardPeriod::AllTime.label()}
            </button>
        </div>

        {move || {
            let period = period.get();
            let title = match period {
                LeaderboardPeriod::Weekly => "Weekly Rankings",
                LeaderboardPeriod::AllTime => "All-Time Rankings",
            };
            view! {
                <LeaderboardCard entries=board.entries(period).to_vec() title=title period=period/>
            }
        }}
    }
}
