use crate::components::{server_error_message, ErrorDisplay, NotificationItem};
use bughive_app::domain::{InboxView, NotificationFilter};
use leptos::prelude::*;
use server_fn::codec::Json;
use server_fn::ServerFnError;

#[server(ListNotificationsFn, "/api", endpoint = "list_notifications", input = Json)]
pub async fn list_notifications(filter: NotificationFilter) -> Result<InboxView, ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.notifications(filter)
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(MarkNotificationReadFn, "/api", endpoint = "mark_notification_read")]
pub async fn mark_notification_read(id: String) -> Result<(), ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.update_inbox(|inbox| inbox.mark_read(&id))
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(MarkAllNotificationsReadFn, "/api", endpoint = "mark_all_notifications_read")]
pub async fn mark_all_notifications_read() -> Result<(), ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.update_inbox(|inbox| {
        inbox.mark_all_read();
        Ok(())
    })
    .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(DeleteNotificationFn, "/api", endpoint = "delete_notification")]
pub async fn delete_notification(id: String) -> Result<(), ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.update_inbox(|inbox| inbox.delete(&id))
        .map_err(|e| ServerFnError::new(e.user_message()))
}

fn badge_text(unread: usize) -> String {
    if unread > 9 {
        "9+".to_string()
    } else {
        unread.to_string()
    }
}

/// Bell button plus the notification panel it opens.
#[component]
pub fn NotificationCenter(open: RwSignal<bool>) -> impl IntoView {
    let filter = RwSignal::new(NotificationFilter::All);

    let mark_read = Action::new(|id: &String| mark_notification_read(id.clone()));
    let mark_all = Action::new(|_: &()| mark_all_notifications_read());
    let delete = Action::new(|id: &String| delete_notification(id.clone()));

    let inbox = Resource::new(
        move || {
            (
                filter.get(),
                mark_read.version().get(),
                mark_all.version().get(),
                delete.version().get(),
            )
        },
        |(filter, ..)| list_notifications(filter),
    );

    let action_error = move || {
        [mark_read.value().get(), mark_all.value().get(), delete.value().get()]
            .into_iter()
            .flatten()
            .find_map(Result::err)
    };

    let unread = move || {
        inbox
            .get()
            .and_then(Result::ok)
            .map(|inbox_view| inbox_view.unread_count)
            .unwrap_or_default()
    };

    let tab_class = move |tab: NotificationFilter| {
        if filter.get() == tab {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    view! {
        <button class="nav__icon notification-bell" title="Notifications" on:click=move |_| open.set(true)>
            "🔔"
            <Transition>
                {move || {
                    let unread = unread();
                    (unread > 0).then(|| view! { <span class="notification-bell__count">{badge_text(unread)}</span> })
                }}
            </Transition>
        </button>

        <Show when=move || open.get()>
            <div class="overlay" on:click=move |_| open.set(false)>
                <section class="card notification-panel" on:click=|ev| ev.stop_propagation()>
                    <header class="card__header">
                        <h2 class="card__title">
                            "Notifications"
                            {move || {
                                let unread = unread();
                                (unread > 0).then(|| view! { <span class="badge badge--danger">{unread}</span> })
                            }}
                        </h2>
                        <div class="notification-panel__controls">
                            <div class="tabs tabs--compact">
                                <button class=move || tab_class(NotificationFilter::All) on:click=move |_| filter.set(NotificationFilter::All)>
                                    "All"
                                </button>
                                <button class=move || tab_class(NotificationFilter::Unread) on:click=move |_| filter.set(NotificationFilter::Unread)>
                                    "Unread (" {unread} ")"
                                </button>
                            </div>
                            <button class="button button--ghost button--small" on:click=move |_| { mark_all.dispatch(()); }>
                                "Mark All Read"
                            </button>
                            <button class="button button--ghost button--small" title="Close" on:click=move |_| open.set(false)>
                                "✕"
                            </button>
                        </div>
                    </header>

                    {move || action_error().map(|e| view! { <ErrorDisplay message=server_error_message(&e)/> })}

                    <Transition>
                        {move || {
                            inbox.get().map(|result| match result {
                                Ok(inbox_view) if inbox_view.notifications.is_empty() => {
                                    let hint = match filter.get() {
                                        NotificationFilter::Unread => "No unread notifications",
                                        NotificationFilter::All => "No notifications to show",
                                    };
                                    view! {
                                        <div class="empty">
                                            <h3>"All caught up!"</h3>
                                            <p class="empty__hint">{hint}</p>
                                        </div>
                                    }.into_any()
                                }
                                Ok(inbox_view) => view! {
                                    <ul class="notification-list">
                                        {inbox_view.notifications.into_iter().map(|notification| view! {
                                            <NotificationItem
                                                notification=notification
                                                on_mark_read=Callback::new(move |id: String| { mark_read.dispatch(id); })
                                                on_delete=Callback::new(move |id: String| { delete.dispatch(id); })
                                            />
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                }.into_any(),
                                Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                            })
                        }}
                    </Transition>
                </section>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_caps_at_nine() {
        assert_eq!(badge_text(3), "3");
        assert_eq!(badge_text(12), "9+");
    }
}
