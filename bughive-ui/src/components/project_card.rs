use bughive_app::domain::{Project, SyncStatus};
use leptos::prelude::*;

fn sync_label(status: SyncStatus) -> &'static str {
    match status {
        SyncStatus::Synced => "✔ Synced",
        SyncStatus::Pending => "⟳ Syncing",
        SyncStatus::Error => "⚠ Sync error",
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let counts = project.bug_counts;
    let resolved = counts.resolved_percent();
    let in_progress = counts.in_progress_percent();

    view! {
        <article class="card project">
            <header class="card__header">
                <div>
                    <h3 class="card__title">{project.name.clone()}</h3>
                    <a class="project__repo" href=format!("https://github.com/{}", project.repository)>
                        {project.repository.clone()}
                    </a>
                </div>
                <span class=format!("badge badge--status-{}", project.status.as_str())>
                    {project.status.as_str()}
                </span>
            </header>
            <p class="project__description">{project.description.clone()}</p>

            <div class="project__counts">
                <span>{counts.total} " total"</span>
                <span>{counts.open} " open"</span>
                <span>{counts.in_progress} " in progress"</span>
                <span>{counts.resolved} " resolved"</span>
            </div>
            <div class="progress" title=format!("{resolved}% resolved, {in_progress}% in progress")>
                <div class="progress__bar progress__bar--resolved" style=format!("width: {resolved}%")></div>
                <div class="progress__bar progress__bar--in-progress" style=format!("width: {in_progress}%")></div>
            </div>
            <p class="project__progress-label">{resolved} "% resolved"</p>

            <footer class="project__footer">
                <span>"👥 " {project.member_count} " members"</span>
                <span class=format!("badge badge--{}", project.priority.as_str())>
                    {project.priority.as_str()} " priority"
                </span>
                <span class=format!("project__sync project__sync--{}", project.sync_status.as_str())>
                    {sync_label(project.sync_status)}
                </span>
                <span class="project__activity">"🕒 " {project.last_activity.clone()}</span>
            </footer>
            <p class="project__maintainers">"Maintainers: " {project.maintainers.join(", ")}</p>
        </article>
    }
}
