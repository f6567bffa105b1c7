use bughive_app::domain::{AttachmentMeta, BugSubmission, Priority};
use leptos::prelude::*;

fn format_size(bytes: u64) -> String {
    match bytes {
        0..=1023 => format!("{bytes} B"),
        1024..=1_048_575 => format!("{:.1} KB", bytes as f64 / 1024.0),
        _ => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
    }
}

fn selected_files(ev: &leptos::ev::Event) -> Vec<AttachmentMeta> {
    let input: web_sys::HtmlInputElement = event_target(ev);
    let Some(files) = input.files() else {
        return Vec::new();
    };
    let attachments = (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| AttachmentMeta {
            name: file.name(),
            size_bytes: file.size() as u64,
            content_type: file.type_(),
        })
        .collect();
    input.set_value("");
    attachments
}

#[component]
pub fn SubmissionForm(
    form: RwSignal<BugSubmission>,
    #[prop(into)] on_submit: Callback<BugSubmission>,
    #[prop(into)] is_submitting: Signal<bool>,
) -> impl IntoView {
    let new_label = RwSignal::new(String::new());

    let add_label = move || {
        let label = new_label.get_untracked();
        form.update(|form| {
            form.add_label(&label);
        });
        new_label.set(String::new());
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = form.get_untracked();
        if submission.can_submit() {
            on_submit.run(submission);
        }
    };

    let blocked = move || is_submitting.get() || !form.with(BugSubmission::can_submit);

    view! {
        <form class="card submission-form" on:submit=on_form_submit>
            <section class="submission-form__section">
                <label class="field">
                    <span class="field__label">"Bug Title *"</span>
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Briefly describe the bug"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        required
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Description *"</span>
                    <textarea
                        class="field__input field__input--area"
                        placeholder="Provide a detailed description of the bug"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        required
                    ></textarea>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span class="field__label">"Priority"</span>
                        <select
                            class="field__input"
                            prop:value=move || form.with(|f| f.priority.as_str())
                            on:change=move |ev| {
                                let priority = Priority::parse(&event_target_value(&ev)).unwrap_or_default();
                                form.update(|f| f.priority = priority);
                            }
                        >
                            {Priority::ALL.into_iter().map(|priority| view! {
                                <option value=priority.as_str()>{priority.label()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"GitHub Repository"</span>
                        <input
                            type="text"
                            class="field__input"
                            placeholder="owner/repository"
                            prop:value=move || form.with(|f| f.repository.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.repository = Some(value).filter(|v| !v.is_empty()));
                            }
                        />
                    </label>
                </div>
            </section>

            <section class="submission-form__section">
                <h3 class="submission-form__heading">"Bug Details"</h3>
                <label class="field">
                    <span class="field__label">"Steps to Reproduce"</span>
                    <textarea
                        class="field__input field__input--area"
                        placeholder="1. Go to...\n2. Click on...\n3. See error"
                        prop:value=move || form.with(|f| f.steps_to_reproduce.clone())
                        on:input=move |ev| form.update(|f| f.steps_to_reproduce = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span class="field__label">"Expected Behavior"</span>
                        <textarea
                            class="field__input"
                            placeholder="What should happen?"
                            prop:value=move || form.with(|f| f.expected_behavior.clone())
                            on:input=move |ev| form.update(|f| f.expected_behavior = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="field">
                        <span class="field__label">"Actual Behavior"</span>
                        <textarea
                            class="field__input"
                            placeholder="What actually happens?"
                            prop:value=move || form.with(|f| f.actual_behavior.clone())
                            on:input=move |ev| form.update(|f| f.actual_behavior = event_target_value(&ev))
                        ></textarea>
                    </label>
                </div>
            </section>

            <section class="submission-form__section">
                <h3 class="submission-form__heading">"Labels & Attachments"</h3>
                <div class="field">
                    <span class="field__label">"Labels"</span>
                    <div class="label-input">
                        <input
                            type="text"
                            class="field__input"
                            placeholder="Add a label"
                            prop:value=move || new_label.get()
                            on:input=move |ev| new_label.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_label();
                                }
                            }
                        />
                        <button type="button" class="button button--outline" on:click=move |_| add_label()>
                            "Add"
                        </button>
                    </div>
                    <ul class="label-list">
                        {move || form.with(|f| f.labels.clone()).into_iter().map(|label| {
                            let remove = label.clone();
                            view! {
                                <li class="badge badge--outline">
                                    {label}
                                    <button
                                        type="button"
                                        class="badge__remove"
                                        title="Remove label"
                                        on:click=move |_| form.update(|f| f.remove_label(&remove))
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="field">
                    <span class="field__label">"Attachments"</span>
                    <input
                        type="file"
                        multiple
                        class="field__input"
                        on:change=move |ev| {
                            let attachments = selected_files(&ev);
                            form.update(|f| attachments.into_iter().for_each(|a| f.add_attachment(a)));
                        }
                    />
                    <ul class="attachment-list">
                        {move || form.with(|f| f.attachments.clone()).into_iter().enumerate().map(|(index, attachment)| view! {
                            <li class="attachment">
                                <span class="attachment__name">{attachment.name}</span>
                                <span class="attachment__size">{format_size(attachment.size_bytes)}</span>
                                <button
                                    type="button"
                                    class="button button--ghost button--small"
                                    title="Remove attachment"
                                    on:click=move |_| form.update(|f| f.remove_attachment(index))
                                >
                                    "✕"
                                </button>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </section>

            <div class="submission-form__actions">
                <span class="badge badge--gaming">"+50 pts"</span>
                <button type="submit" class="button button--hero" prop:disabled=blocked>
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit Bug Report" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1_048_576), "3.0 MB");
    }
}
