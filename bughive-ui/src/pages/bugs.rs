use crate::components::{server_error_message, BugCard, ErrorDisplay, LoadingSpinner};
use bughive_app::application::BoardSnapshot;
use bughive_app::domain::{
    tally, BugQuery, BugStatus, Priority, PriorityFilter, SortKey, StatusFilter, VoteDirection,
    VoteOutcome,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use server_fn::codec::Json;
use server_fn::ServerFnError;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[server(ListBugsFn, "/api", endpoint = "list_bugs", input = Json)]
pub async fn list_bugs(query: BugQuery) -> Result<BoardSnapshot, ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.board_snapshot(&query)
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(CastVoteFn, "/api", endpoint = "cast_vote", input = Json)]
pub async fn cast_vote(
    bug_id: String,
    direction: VoteDirection,
) -> Result<VoteOutcome, ServerFnError> {
    use bughive_app::AppContext;
    use bughive_errors::AppError;

    let ctx = expect_context::<AppContext>();
    let caller = ctx.demo_user().to_string();

    if let Err(e) = ctx.rate_limiter.check_rate_limit(&caller) {
        tracing::warn!("Vote from {} rate limited: {:?}", caller, e);
        return Err(ServerFnError::new(AppError::from(e).user_message()));
    }

    ctx.cast_vote
        .execute(&bug_id, &caller, direction)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

/// Client-side view of one bug's vote while the server settles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VoteState {
    choice: Option<VoteDirection>,
    votes: i32,
}

/// Server-side pending votes lock a card until this client has its own
/// result for that bug.
fn vote_locked(bug_id: &str, local: &HashSet<String>, server: &[String], settled_here: bool) -> bool {
    local.contains(bug_id) || (!settled_here && server.iter().any(|pending| pending == bug_id))
}

/// How long to wait before asking the server again about pending votes.
const PENDING_RECHECK: Duration = Duration::from_millis(750);

#[component]
pub fn BugList(
    /// Shows the search box, selects and status chips.
    #[prop(optional)]
    show_filters: bool,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let query = RwSignal::new(BugQuery::new().with_limit(limit));
    let snapshot = Resource::new(move || query.get(), list_bugs);

    // Latest known vote per bug, ahead of the last fetched snapshot.
    let overrides = RwSignal::new(HashMap::<String, VoteState>::new());
    let pending = RwSignal::new(HashSet::<String>::new());
    let vote_error = RwSignal::new(None::<String>);

    // Votes left pending by another tab or before a reload settle on the
    // server; poll until the snapshot no longer lists any.
    Effect::new(move |_| {
        let waiting = snapshot
            .get()
            .and_then(Result::ok)
            .is_some_and(|snapshot| !snapshot.pending.is_empty());
        if waiting {
            set_timeout(move || snapshot.refetch(), PENDING_RECHECK);
        }
    });

    let vote = move |bug_id: String, current: VoteState, direction: VoteDirection| {
        if pending.with_untracked(|p| p.contains(&bug_id)) {
            return;
        }
        let transition = tally(current.choice, direction);
        overrides.update(|o| {
            o.insert(
                bug_id.clone(),
                VoteState {
                    choice: transition.choice,
                    votes: current.votes + transition.delta,
                },
            );
        });
        pending.update(|p| {
            p.insert(bug_id.clone());
        });

        spawn_local(async move {
            let settled = match cast_vote(bug_id.clone(), direction).await {
                Ok(outcome) => VoteState {
                    choice: outcome.choice,
                    votes: outcome.votes,
                },
                Err(e) => {
                    vote_error.set(Some(server_error_message(&e)));
                    current
                }
            };
            overrides.update(|o| {
                o.insert(bug_id.clone(), settled);
            });
            pending.update(|p| {
                p.remove(&bug_id);
            });
        });
    };

    view! {
        <div class="bug-list">
            {show_filters.then(|| view! { <BugFilters query=query snapshot=snapshot/> })}

            {move || vote_error.get().map(|message| view! {
                <ErrorDisplay
                    message=message
                    on_dismiss=Callback::new(move |_| vote_error.set(None))
                />
            })}

            <Suspense fallback=move || view! { <LoadingSpinner message="Loading bugs..."/> }>
                {move || {
                    snapshot.get().map(|result| {
                        match result {
                            Ok(snapshot) => {
                                if snapshot.page.is_empty() {
                                    let hint = if query.with(BugQuery::is_filtered) {
                                        "Try adjusting your search or filters"
                                    } else {
                                        "Be the first to report a bug!"
                                    };
                                    view! {
                                        <div class="card empty">
                                            <p class="empty__icon">"🐛"</p>
                                            <h3>"No bugs found"</h3>
                                            <p class="empty__hint">{hint}</p>
                                            <A href="/submit-bug" attr:class="button button--hero">"Report Your First Bug"</A>
                                        </div>
                                    }.into_any()
                                } else {
                                    let total = snapshot.page.total;
                                    let server_pending = snapshot.pending.clone();
                                    let has_more = snapshot.page.has_more();
                                    view! {
                                        <ul class="bug-list__items">
                                            {snapshot.page.bugs.into_iter().map(|mut bug| {
                                                let state = overrides
                                                    .with(|o| o.get(&bug.id).copied())
                                                    .unwrap_or(VoteState {
                                                        choice: snapshot.my_votes.get(&bug.id).copied(),
                                                        votes: bug.votes,
                                                    });
                                                bug.votes = state.votes;
                                                let id = bug.id.clone();
                                                let pending_id = bug.id.clone();
                                                let server_pending = server_pending.clone();
                                                view! {
                                                    <li>
                                                        <BugCard
                                                            bug=bug
                                                            my_vote=state.choice
                                                            pending=Signal::derive(move || {
                                                                let settled_here = overrides.with(|o| o.contains_key(&pending_id));
                                                                pending.with(|p| vote_locked(&pending_id, p, &server_pending, settled_here))
                                                            })
                                                            on_vote=Callback::new(move |direction| vote(id.clone(), state, direction))
                                                        />
                                                    </li>
                                                }
                                            }).collect::<Vec<_>>()}
                                        </ul>
                                        {has_more.then(|| view! {
                                            <div class="bug-list__more">
                                                <A href="/bugs" attr:class="button button--outline">
                                                    "View All " {total} " Bugs 🐛"
                                                </A>
                                            </div>
                                        })}
                                    }.into_any()
                                }
                            }
                            Err(e) => view! {
                                <ErrorDisplay
                                    message=server_error_message(&e)
                                    on_retry=Callback::new(move |_| snapshot.refetch())
                                />
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn BugFilters(
    query: RwSignal<BugQuery>,
    snapshot: Resource<Result<BoardSnapshot, ServerFnError>>,
) -> impl IntoView {
    let counts = move || {
        snapshot
            .get()
            .and_then(Result::ok)
            .map(|snapshot| snapshot.counts)
            .unwrap_or_default()
    };
    let found = move || {
        snapshot
            .get()
            .and_then(Result::ok)
            .map(|snapshot| snapshot.page.total)
            .unwrap_or_default()
    };

    let status_chips = [
        (StatusFilter::All, "All"),
        (StatusFilter::Only(BugStatus::Open), "Open"),
        (StatusFilter::Only(BugStatus::InProgress), "In Progress"),
        (StatusFilter::Only(BugStatus::Resolved), "Resolved"),
        (StatusFilter::Only(BugStatus::Closed), "Closed"),
    ];

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">"Bug Reports"</h1>
                <Transition>
                    <p class="page-header__subtitle">
                        {move || {
                            let found = found();
                            format!("{} bug{} found", found, if found == 1 { "" } else { "s" })
                        }}
                    </p>
                </Transition>
            </div>
            <A href="/submit-bug" attr:class="button button--hero">"+ Report Bug"</A>
        </header>

        <div class="card filters">
            <input
                type="search"
                class="field__input filters__search"
                placeholder="Search bugs by title, description, labels, or author..."
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
            />
            <div class="filters__selects">
                <select
                    class="field__input"
                    prop:value=move || query.with(|q| q.sort.as_str())
                    on:change=move |ev| query.update(|q| q.sort = SortKey::parse(&event_target_value(&ev)))
                >
                    {SortKey::ALL.into_iter().map(|key| view! {
                        <option value=key.as_str()>{key.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
                <select
                    class="field__input"
                    prop:value=move || query.with(|q| q.priority.as_str())
                    on:change=move |ev| query.update(|q| q.priority = PriorityFilter::parse(&event_target_value(&ev)))
                >
                    <option value="all">"All Priority"</option>
                    {Priority::ALL.into_iter().map(|priority| view! {
                        <option value=priority.as_str()>{priority.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
                <button
                    class="button button--outline button--small"
                    on:click=move |_| query.update(BugQuery::reset)
                >
                    "Clear Filters"
                </button>
            </div>
        </div>

        <Transition>
            <div class="status-chips">
                {move || {
                    let counts = counts();
                    status_chips.into_iter().map(|(filter, label)| {
                        let class = move || if query.with(|q| q.status == filter) {
                            "status-chip status-chip--active"
                        } else {
                            "status-chip"
                        };
                        view! {
                            <button class=class on:click=move |_| query.update(|q| q.status = filter)>
                                <strong class="status-chip__count">{counts.get(filter)}</strong>
                                <span class="status-chip__label">{label}</span>
                            </button>
                        }
                    }).collect::<Vec<_>>()
                }}
            </div>
        </Transition>
    }
}

#[component]
pub fn BugsPage() -> impl IntoView {
    view! {
        <BugList show_filters=true/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_pending_vote_locks_card_after_reload() {
        let local = HashSet::new();
        let server = vec!["2".to_string()];

        assert!(vote_locked("2", &local, &server, false));
        assert!(!vote_locked("3", &local, &server, false));
        assert!(!vote_locked("2", &local, &server, true));
    }

    #[test]
    fn test_local_pending_vote_locks_card() {
        let local = HashSet::from(["5".to_string()]);
        assert!(vote_locked("5", &local, &[], true));
    }
}
