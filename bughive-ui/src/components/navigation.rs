use super::Avatar;
use crate::pages::{get_profile, NotificationCenter};
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/bugs", "Bugs"),
    ("/leaderboard", "Leaderboard"),
    ("/projects", "Projects"),
    ("/profile", "Profile"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let profile = Resource::new(|| (), |_| get_profile());
    let show_notifications = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <A href="/" attr:class="nav__logo">
                    <span class="nav__logo-mark">"B"</span>
                    <span class="nav__logo-text">"BugHive"</span>
                </A>

                <ul class=move || if mobile_open.get() { "nav__links nav__links--open" } else { "nav__links" }>
                    {NAV_ITEMS.into_iter().map(|(href, label)| view! {
                        <li>
                            <A href=href exact={href == "/"} attr:class="nav__link">{label}</A>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>

                <div class="nav__actions">
                    <A href="/ai" attr:class="nav__icon" attr:title="AI Assistant">"🤖"</A>
                    <NotificationCenter open=show_notifications/>
                    <A href="/submit-bug" attr:class="button button--hero button--small">"Report Bug"</A>
                    <Suspense>
                        {move || profile.get().and_then(Result::ok).map(|profile| view! {
                            <A href="/profile" attr:class="nav__user">
                                <span class="nav__user-summary">
                                    <span class="nav__user-name">{profile.name.clone()}</span>
                                    <span class="nav__user-stats">
                                        {profile.stats.total_points} " pts · Rank #" {profile.stats.rank}
                                    </span>
                                </span>
                                <Avatar name=profile.name src=profile.avatar.unwrap_or_default()/>
                            </A>
                        })}
                    </Suspense>
                    <button
                        class="nav__menu-toggle"
                        title="Menu"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
