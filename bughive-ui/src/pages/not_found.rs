use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card empty">
            <p class="empty__icon">"🐞"</p>
            <h1>"404"</h1>
            <p class="empty__hint">"Oops! This page wandered off."</p>
            <A href="/" attr:class="button button--hero">"Return to Dashboard"</A>
        </div>
    }
}
