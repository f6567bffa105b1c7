use super::bugs::{list_bugs, BugList};
use super::leaderboard::get_leaderboard;
use super::profile::get_profile;
use crate::components::{server_error_message, ErrorDisplay, LeaderboardCard, LoadingSpinner};
use bughive_app::domain::{BugQuery, LeaderboardPeriod, SUBMISSION_POINTS};
use leptos::prelude::*;
use leptos_router::components::A;

/// Points granted for confirming someone else's report.
const VERIFY_POINTS: u32 = 10;

#[component]
pub fn HomePage() -> impl IntoView {
    let snapshot = Resource::new(|| (), |_| list_bugs(BugQuery::new()));
    let leaderboard = Resource::new(|| (), |_| get_leaderboard());
    let profile = Resource::new(|| (), |_| get_profile());

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">"BugHive"</h1>
                <p class="page-header__subtitle">"Crowdsourced bug reporting with community-driven prioritization"</p>
            </div>
            <A href="/submit-bug" attr:class="button button--hero">"+ Report Bug"</A>
        </header>

        <Transition fallback=move || view! { <LoadingSpinner/> }>
            {move || {
                let counts = snapshot.get().and_then(Result::ok).map(|s| s.counts);
                let contributors = leaderboard
                    .get()
                    .and_then(Result::ok)
                    .map(|board| board.entries(LeaderboardPeriod::Weekly).len())
                    .unwrap_or_default();
                counts.map(|counts| {
                    let tiles = [
                        ("🐛", "Total Bugs", counts.all),
                        ("⚡", "Active Issues", counts.open + counts.in_progress),
                        ("✅", "Resolved", counts.resolved),
                        ("👥", "Contributors", contributors),
                    ];
                    view! {
                        <div class="stats-grid">
                            {tiles.into_iter().map(|(icon, label, value)| view! {
                                <div class="card stat">
                                    <span class="stat__icon">{icon}</span>
                                    <strong class="stat__value">{value}</strong>
                                    <span class="stat__label">{label}</span>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    }
                })
            }}
        </Transition>

        <div class="dashboard">
            <section class="dashboard__main">
                <div class="section-header">
                    <h2>"Recent Bug Reports"</h2>
                    <A href="/bugs" attr:class="button button--ghost button--small">"View All"</A>
                </div>
                <BugList limit=3/>
            </section>

            <aside class="dashboard__side">
                <Suspense fallback=move || view! { <LoadingSpinner message="Loading leaderboard..."/> }>
                    {move || leaderboard.get().map(|result| match result {
                        Ok(board) => view! {
                            <LeaderboardCard
                                entries=board.entries(LeaderboardPeriod::Weekly).to_vec()
                                title="Top Contributors"
                                period=LeaderboardPeriod::Weekly
                            />
                        }.into_any(),
                        Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                    })}
                </Suspense>

                <section class="card">
                    <h3 class="card__title">"Quick Actions"</h3>
                    <A href="/submit-bug" attr:class="quick-action">
                        <span>"🐛 Report New Bug"</span>
                        <span class="badge badge--gaming">"+" {SUBMISSION_POINTS} " pts"</span>
                    </A>
                    <A href="/bugs" attr:class="quick-action">
                        <span>"✅ Verify Bug Reports"</span>
                        <span class="badge badge--gaming">"+" {VERIFY_POINTS} " pts"</span>
                    </A>
                </section>

                <Suspense>
                    {move || profile.get().and_then(Result::ok).map(|profile| view! {
                        <section class="card">
                            <h3 class="card__title">"Your Stats"</h3>
                            <dl class="your-stats">
                                <dt>"Points"</dt>
                                <dd>{profile.stats.total_points}</dd>
                                <dt>"Rank"</dt>
                                <dd>"#" {profile.stats.rank}</dd>
                                <dt>"Bugs Reported"</dt>
                                <dd>{profile.stats.bugs_reported}</dd>
                                <dt>"Day Streak"</dt>
                                <dd>{profile.stats.streak_days} " 🔥"</dd>
                            </dl>
                        </section>
                    })}
                </Suspense>
            </aside>
        </div>
    }
}
