use bughive_app::domain::{Notification, NotificationKind};
use leptos::prelude::*;

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::BadgeEarned => "⭐",
        NotificationKind::BugUpdate => "🐛",
        NotificationKind::RankChange | NotificationKind::Achievement => "🏆",
        NotificationKind::Verification => "✔",
        NotificationKind::Comment => "💬",
    }
}

#[component]
pub fn NotificationItem(
    notification: Notification,
    #[prop(into)] on_mark_read: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let Notification {
        id,
        kind,
        title,
        message,
        timestamp,
        is_read,
        priority,
        action_url,
        meta,
    } = notification;

    let class = if is_read {
        "notification"
    } else {
        "notification notification--unread"
    };
    let rank_change = meta.old_rank.zip(meta.new_rank);
    let read_id = id.clone();
    let click_id = id.clone();

    view! {
        <li
            class=class
            on:click=move |_| {
                if !is_read {
                    on_mark_read.run(click_id.clone());
                }
            }
        >
            <span class="notification__icon">{kind_icon(kind)}</span>
            <div class="notification__body">
                <div class="notification__heading">
                    <h4 class="notification__title">{title}</h4>
                    <span class=format!("badge badge--{}", priority.as_str())>{priority.as_str()}</span>
                    {(!is_read).then(|| view! { <span class="notification__dot"></span> })}
                </div>
                <p class="notification__message">{message}</p>
                <div class="notification__meta">
                    {meta.points.map(|points| view! {
                        <span class="badge badge--gaming">"+" {points} " pts"</span>
                    })}
                    {meta.badge_name.map(|name| view! {
                        <span class="badge badge--success">{name}</span>
                    })}
                    {rank_change.map(|(old, new)| view! {
                        <span class="badge badge--warning">"#" {old} " → #" {new}</span>
                    })}
                </div>
                <div class="notification__footer">
                    <span class="notification__time">{timestamp}</span>
                    {action_url.map(|url| view! {
                        <a class="button button--outline button--small" href=url>"View Details"</a>
                    })}
                    {(!is_read).then(|| view! {
                        <button
                            class="button button--ghost button--small"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_mark_read.run(read_id.clone());
                            }
                        >
                            "Mark as Read"
                        </button>
                    })}
                    <button
                        class="button button--ghost button--small"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(id.clone());
                        }
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </li>
    }
}
