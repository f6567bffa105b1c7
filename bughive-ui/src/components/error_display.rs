use leptos::prelude::*;
use server_fn::ServerFnError;

#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error" role="alert">
            <p class="error__title">"Something went wrong"</p>
            <p class="error__message">{message}</p>
            {move || on_retry.map(|retry| view! {
                <button
                    class="error__retry"
                    on:click=move |_| retry.run(())
                >
                    "Try Again"
                </button>
            })}
            {move || on_dismiss.map(|dismiss| view! {
                <button
                    class="error__dismiss"
                    on:click=move |_| dismiss.run(())
                >
                    "Dismiss"
                </button>
            })}
        </div>
    }
}

/// The text a server function put into its error, without the transport prefix.
pub fn server_error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
