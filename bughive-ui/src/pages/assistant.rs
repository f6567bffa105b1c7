use crate::components::{server_error_message, ChatMessage, ErrorDisplay};
use bughive_app::domain::{AssistantMessage, MessageRole, QUICK_PROMPTS};
use leptos::prelude::*;
use server_fn::ServerFnError;

#[server(AssistantGreetingFn, "/api", endpoint = "assistant_greeting")]
pub async fn assistant_greeting() -> Result<AssistantMessage, ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.assistant.greeting())
}

#[server(AskAssistantFn, "/api", endpoint = "ask_assistant")]
pub async fn ask_assistant(input: String) -> Result<AssistantMessage, ServerFnError> {
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.assistant
        .execute(&input)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

const CAPABILITIES: [(&str, &str, &str); 4] = [
    ("🎯", "Smart Prioritization", "Analyzes bug severity and impact to suggest priorities"),
    ("🔁", "Duplicate Detection", "Spots reports that describe the same problem"),
    ("📈", "Pattern Analysis", "Finds recurring issues across projects"),
    ("💡", "Solution Suggestions", "Proposes fixes based on similar resolved bugs"),
];

#[component]
pub fn AssistantPage() -> impl IntoView {
    let greeting = Resource::new(|| (), |_| assistant_greeting());
    let conversation = RwSignal::new(Vec::<AssistantMessage>::new());
    let input = RwSignal::new(String::new());

    let ask = Action::new(|question: &String| ask_assistant(question.clone()));

    let send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || ask.pending().get_untracked() {
            return;
        }
        conversation.update(|c| c.push(AssistantMessage::new(MessageRole::User, text.clone())));
        input.set(String::new());
        ask.dispatch(text);
    };

    Effect::new(move |_| {
        if let Some(Ok(reply)) = ask.value().get() {
            conversation.update(|c| c.push(reply));
        }
    });

    let ask_error = move || ask.value().get().and_then(Result::err);

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">"AI Assistant"</h1>
                <p class="page-header__subtitle">"Get intelligent insights and automation for bug management"</p>
            </div>
            <span class="badge badge--gaming">"🧠 Scripted"</span>
        </header>

        <div class="assistant-layout">
            <section class="card chat">
                <header class="card__header">
                    <h2 class="card__title">"🤖 BugHive Assistant"</h2>
                    <span class="badge badge--success">"Online"</span>
                </header>

                <ul class="chat__messages">
                    <Suspense>
                        {move || greeting.get().map(|result| match result {
                            Ok(message) => view! { <ChatMessage message=message/> }.into_any(),
                            Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                        })}
                    </Suspense>
                    <For
                        each=move || conversation.get()
                        key=|message| message.id.clone()
                        children=|message| view! { <ChatMessage message=message/> }
                    />
                    <Show when=move || ask.pending().get()>
                        <li class="chat__message chat__message--assistant chat__typing">"Thinking..."</li>
                    </Show>
                </ul>

                {move || ask_error().map(|e| view! { <ErrorDisplay message=server_error_message(&e)/> })}

                <div class="chat__quick">
                    {QUICK_PROMPTS.into_iter().map(|(label, prompt)| view! {
                        <button
                            class="button button--outline button--small"
                            prop:disabled=move || ask.pending().get()
                            on:click=move |_| send(prompt.to_string())
                        >
                            {label}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                <form
                    class="chat__input"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        send(input.get_untracked());
                    }
                >
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Ask about bug analysis, priorities, duplicates..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="button button--hero"
                        prop:disabled=move || ask.pending().get() || input.with(|text| text.trim().is_empty())
                    >
                        "Send"
                    </button>
                </form>
            </section>

            <aside class="card">
                <h3 class="card__title">"✨ AI Capabilities"</h3>
                <ul class="capabilities">
                    {CAPABILITIES.into_iter().map(|(icon, title, description)| view! {
                        <li class="capability">
                            <span class="capability__icon">{icon}</span>
                            <div>
                                <strong>{title}</strong>
                                <p>{description}</p>
                            </div>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </aside>
        </div>
    }
}
