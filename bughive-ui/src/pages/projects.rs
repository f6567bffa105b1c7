use crate::components::{server_error_message, ErrorDisplay, LoadingSpinner, ProjectCard};
use bughive_app::domain::{Project, ProjectFilter};
use leptos::prelude::*;
use server_fn::codec::Json;
use server_fn::ServerFnError;

#[server(ListProjectsFn, "/api", endpoint = "list_projects", input = Json)]
pub async fn list_projects(filter: ProjectFilter) -> Result<Vec<Project>, ServerFnError> {
    use bughive_app::domain::filter_projects;
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(filter_projects(&ctx.projects, filter))
}

const FILTERS: [(ProjectFilter, &str); 3] = [
    (ProjectFilter::All, "All Projects"),
    (ProjectFilter::Active, "Active"),
    (ProjectFilter::Archived, "Archived"),
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::All);
    let projects = Resource::new(move || filter.get(), list_projects);

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">"Projects"</h1>
                <p class="page-header__subtitle">"Repositories connected to BugHive"</p>
            </div>
        </header>

        <div class="tabs">
            {FILTERS.into_iter().map(|(value, label)| view! {
                <button
                    class=move || if filter.get() == value { "tab tab--active" } else { "tab" }
                    on:click=move |_| filter.set(value)
                >
                    {label}
                </button>
            }).collect::<Vec<_>>()}
        </div>

        <Transition fallback=move || view! { <LoadingSpinner message="Loading projects..."/> }>
            {move || {
                projects.get().map(|result| match result {
                    Ok(projects) if projects.is_empty() => view! {
                        <div class="card empty">
                            <h3>"No projects found"</h3>
                            <p class="empty__hint">"Nothing matches this filter yet."</p>
                        </div>
                    }.into_any(),
                    Ok(projects) => view! {
                        <div class="project-grid">
                            {projects.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                    Err(e) => view! {
                        <ErrorDisplay
                            message=server_error_message(&e)
                            on_retry=Callback::new(move |_| projects.refetch())
                        />
                    }.into_any(),
                })
            }}
        </Transition>
    }
}
