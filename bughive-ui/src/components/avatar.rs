use bughive_app::domain::initials;
use leptos::prelude::*;

/// Image when one is set, initials otherwise.
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional)] src: Option<String>,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let class = if large { "avatar avatar--large" } else { "avatar" };
    match src.filter(|src| !src.is_empty()) {
        Some(src) => view! { <img class=class src=src alt=name/> }.into_any(),
        None => view! { <span class=class title=name.clone()>{initials(&name)}</span> }.into_any(),
    }
}
