use super::Avatar;
use bughive_app::domain::{Bug, VoteDirection};
use leptos::prelude::*;

fn vote_button_class(active: bool) -> &'static str {
    if active {
        "vote__button vote__button--active"
    } else {
        "vote__button"
    }
}

#[component]
pub fn BugCard(
    bug: Bug,
    /// The viewer's current vote on this bug.
    my_vote: Option<VoteDirection>,
    /// True while a vote on this bug is waiting for its commit.
    #[prop(into)]
    pending: Signal<bool>,
    #[prop(into)] on_vote: Callback<VoteDirection>,
) -> impl IntoView {
    let synced = bug.is_synced();
    let labels = bug.labels.clone();

    view! {
        <article class="bug-card">
            <header class="bug-card__header">
                <div class="bug-card__summary">
                    <h3 class="bug-card__title">{bug.title.clone()}</h3>
                    <p class="bug-card__description">{bug.description.clone()}</p>
                </div>
                <div class=move || if pending.get() { "vote vote--pending" } else { "vote" }>
                    <button
                        class=vote_button_class(my_vote == Some(VoteDirection::Up))
                        title="Upvote"
                        prop:disabled=move || pending.get()
                        on:click=move |_| on_vote.run(VoteDirection::Up)
                    >
                        "▲"
                    </button>
                    <span class="vote__count">{bug.votes}</span>
                    <button
                        class=vote_button_class(my_vote == Some(VoteDirection::Down))
                        title="Downvote"
                        prop:disabled=move || pending.get()
                        on:click=move |_| on_vote.run(VoteDirection::Down)
                    >
                        "▼"
                    </button>
                </div>
            </header>

            <div class="bug-card__badges">
                <span class=format!("badge badge--{}", bug.priority.as_str())>
                    {bug.priority.label()}
                </span>
                <span class=format!("badge badge--status-{}", bug.status.as_str())>
                    {bug.status.label()}
                </span>
                {synced.then(|| view! {
                    <a class="badge badge--outline" href=bug.tracker_url.clone().unwrap_or_default()>
                        "Synced"
                    </a>
                })}
            </div>

            {(!labels.is_empty()).then(|| view! {
                <ul class="bug-card__labels">
                    {labels.into_iter().map(|label| view! {
                        <li class="badge badge--outline">{label}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            })}

            <footer class="bug-card__meta">
                <span class="bug-card__author">
                    <Avatar name=bug.author.name.clone() src=bug.author.avatar.clone().unwrap_or_default()/>
                    "by " {bug.author.name.clone()}
                </span>
                <span class="bug-card__comments">"💬 " {bug.comments}</span>
                <span class="bug-card__created">"🕒 " {bug.created_at.clone()}</span>
            </footer>
        </article>
    }
}
