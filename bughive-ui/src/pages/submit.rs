use crate::components::{server_error_message, ErrorDisplay, SubmissionForm};
use bughive_app::domain::{BugSubmission, SubmissionReceipt};
use leptos::prelude::*;
use leptos_router::components::A;
use server_fn::codec::Json;
use server_fn::ServerFnError;

#[server(SubmitBugFn, "/api", endpoint = "submit_bug", input = Json)]
pub async fn submit_bug(submission: BugSubmission) -> Result<SubmissionReceipt, ServerFnError> {
    use bughive_app::domain::Author;
    use bughive_app::AppContext;

    let ctx = expect_context::<AppContext>();
    let author = Author::new(ctx.demo_user());

    ctx.submit_bug
        .execute(submission, author)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

const TIPS: [&str; 5] = [
    "Be specific and descriptive in your title",
    "Include clear steps to reproduce the issue",
    "Attach screenshots or logs when helpful",
    "Use appropriate labels to categorize the bug",
    "Link to the GitHub repository if available",
];

#[component]
pub fn SubmitBugPage() -> impl IntoView {
    let form = RwSignal::new(BugSubmission::new());
    let submit = Action::new(|submission: &BugSubmission| submit_bug(submission.clone()));

    let on_submit = Callback::new(move |submission: BugSubmission| {
        submit.dispatch(submission);
    });

    let submit_another = move |_| {
        form.set(BugSubmission::new());
        submit.value().set(None);
    };

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">"Submit Bug Report"</h1>
                <p class="page-header__subtitle">"Help improve projects by reporting bugs"</p>
            </div>
        </header>

        {move || match submit.value().get() {
            Some(Ok(receipt)) => view! {
                <section class="card success">
                    <p class="success__icon">"🎉"</p>
                    <h2>"Bug Report Submitted!"</h2>
                    <p>"Your report is now bug #" {receipt.bug_id} " on the board."</p>
                    <span class="badge badge--gaming">"+" {receipt.points} " pts"</span>
                    <div class="success__actions">
                        <A href="/bugs" attr:class="button button--outline">"View Bugs"</A>
                        <button class="button button--hero" on:click=submit_another>"Submit Another Report"</button>
                    </div>
                </section>
            }.into_any(),
            failed => view! {
                {failed.and_then(Result::err).map(|e| view! {
                    <ErrorDisplay message=server_error_message(&e)/>
                })}
                <div class="submit-layout">
                    <SubmissionForm form=form on_submit=on_submit is_submitting=submit.pending()/>
                    <aside class="card tips">
                        <h3 class="card__title">"Tips for Great Bug Reports"</h3>
                        <ul>
                            {TIPS.into_iter().map(|tip| view! { <li>{tip}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </aside>
                </div>
            }.into_any(),
        }}
    }
}
