use crate::components::{server_error_message, Avatar, ErrorDisplay, LoadingSpinner};
use bughive_app::domain::UserProfile;
use leptos::prelude::*;
use server_fn::ServerFnError;

#[server(GetProfileFn, "/api", endpoint = "profile")]
pub async fn get_profile() -> Result<UserProfile, ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.profile.as_ref().clone())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = Resource::new(|| (), |_| get_profile());

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner message="Loading profile..."/> }>
            {move || {
                profile.get().map(|result| match result {
                    Ok(profile) => view! { <ProfileView profile=profile/> }.into_any(),
                    Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn ProfileView(profile: UserProfile) -> impl IntoView {
    let stats = profile.stats;
    let stat_cards = [
        ("Total Points", stats.total_points),
        ("Global Rank", stats.rank),
        ("Bugs Reported", stats.bugs_reported),
        ("Bugs Verified", stats.bugs_verified),
        ("Bugs Resolved", stats.bugs_resolved),
        ("Votes Given", stats.votes_given),
        ("Votes Received", stats.votes_received),
        ("Day Streak", stats.streak_days),
    ];

    view! {
        <section class="card profile">
            <Avatar name=profile.name.clone() src=profile.avatar.clone().unwrap_or_default() large=true/>
            <div class="profile__details">
                <h1 class="profile__name">{profile.name.clone()}</h1>
                <p class="profile__username">"@" {profile.username.clone()}</p>
                <p class="profile__bio">{profile.bio.clone()}</p>
                <ul class="profile__facts">
                    {profile.location.clone().map(|location| view! { <li>"📍 " {location}</li> })}
                    <li>"📅 Joined " {profile.join_date.clone()}</li>
                    <li>"✉ " {profile.email.clone()}</li>
                    {profile.github_username.clone().map(|github| view! {
                        <li>
                            <a href=format!("https://github.com/{github}")>"GitHub: " {github.clone()}</a>
                        </li>
                    })}
                </ul>
            </div>
        </section>

        <div class="stat-grid">
            {stat_cards.into_iter().map(|(label, value)| view! {
                <div class="card stat">
                    <strong>{if label == "Global Rank" { format!("#{value}") } else { value.to_string() }}</strong>
                    <span>{label}</span>
                </div>
            }).collect::<Vec<_>>()}
        </div>

        <section class="card">
            <header class="card__header">
                <h2 class="card__title">"🏅 Badges"</h2>
                <span class="badge badge--outline">{profile.badges.len()} " earned"</span>
            </header>
            <ul class="badge-grid">
                {profile.badges.into_iter().map(|badge| view! {
                    <li class=format!("profile-badge profile-badge--{}", badge.rarity.as_str())>
                        <span class="profile-badge__icon">{badge.icon}</span>
                        <strong>{badge.name}</strong>
                        <p>{badge.description}</p>
                        <span class="profile-badge__date">"Unlocked " {badge.unlocked_at}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
