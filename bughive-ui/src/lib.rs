pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use components::Navigation;
use pages::{
    AssistantPage, BugsPage, HomePage, LeaderboardPage, NotFound, ProfilePage, ProjectsPage,
    SubmitBugPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="BugHive | Crowdsourced Bug Reporting"/>
        <Meta name="description" content="Crowdsourced bug reporting with community-driven prioritization"/>

        <Router>
            <Navigation/>
            <main class="container">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/bugs") view=BugsPage/>
                    <Route path=path!("/leaderboard") view=LeaderboardPage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/submit-bug") view=SubmitBugPage/>
                    <Route path=path!("/ai") view=AssistantPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
