use bughive_app::domain::{AssistantMessage, ConfidenceTier, MessageRole, SuggestionKind};
use leptos::prelude::*;

fn suggestion_icon(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Priority => "⚡",
        SuggestionKind::Label => "🏷",
        SuggestionKind::Assignment => "👤",
        SuggestionKind::Duplicate => "🔁",
        SuggestionKind::Solution => "💡",
    }
}

fn tier_class(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => "confidence confidence--high",
        ConfidenceTier::Medium => "confidence confidence--medium",
        ConfidenceTier::Low => "confidence confidence--low",
    }
}

#[component]
pub fn ChatMessage(message: AssistantMessage) -> impl IntoView {
    let class = match message.role {
        MessageRole::User => "chat__message chat__message--user",
        MessageRole::Assistant => "chat__message chat__message--assistant",
    };
    let time = message.timestamp.format("%H:%M").to_string();

    view! {
        <li class=class>
            <p class="chat__content">{message.content}</p>
            {(!message.suggestions.is_empty()).then(|| view! {
                <ul class="chat__suggestions">
                    {message.suggestions.into_iter().map(|suggestion| {
                        let tier = suggestion.confidence_tier();
                        view! {
                            <li class="suggestion">
                                <span class="suggestion__icon">{suggestion_icon(suggestion.kind)}</span>
                                <div class="suggestion__body">
                                    <strong class="suggestion__title">{suggestion.title}</strong>
                                    <p class="suggestion__description">{suggestion.description}</p>
                                </div>
                                <span class=tier_class(tier)>{suggestion.confidence} "%"</span>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            })}
            <time class="chat__time">{time}</time>
        </li>
    }
}
