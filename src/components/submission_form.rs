//! Submission Form Component
//!
//! Client-side validation, then a POST to the submission API route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use showcase_core::domain::{SubmitStatus, CREATOR_MAX_LEN, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use showcase_core::submit::SubmissionClient;
use showcase_core::{FormData, ProjectStatus, SubmitError};

use crate::bindings::site_origin;
use crate::context::use_app_context;

/// Single-line input bound to one `FormData` field by its `name`
#[component]
fn TextField(
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] max_len: Option<usize>,
    #[prop(optional)] required: bool,
    value: Signal<String>,
    set_form: WriteSignal<FormData>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="field-label">{label} {required.then_some(" *")}</span>
            <input
                type=kind
                name=name
                placeholder=placeholder
                maxlength=max_len.map(|n| n.to_string())
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_form.update(|form| form.set_field(name, text));
                }
            />
        </label>
    }
}

#[component]
pub fn SubmissionForm() -> impl IntoView {
    let ctx = use_app_context();
    let (form, set_form) = signal(FormData::default());
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (submitting, set_submitting) = signal(false);

    let field = move |get: fn(&FormData) -> &String| Signal::derive(move || form.with(|f| get(f).clone()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let data = form.get_untracked();
        let errors = data.validate();
        if !errors.is_empty() {
            set_status.set(SubmitStatus::Error(SubmitError::Validation(errors).user_message()));
            return;
        }

        set_submitting.set(true);
        set_status.set(SubmitStatus::Idle);
        let path = ctx.config.with_value(|config| config.submit_path.clone());
        spawn_local(async move {
            let result = match site_origin() {
                Ok(origin) => SubmissionClient::for_origin(&origin, &path).submit(&data).await,
                Err(err) => Err(SubmitError::Network(err)),
            };
            match result {
                Ok(receipt) => {
                    log::info!("Project '{}' submitted", data.title);
                    set_status.set(SubmitStatus::Success(receipt));
                    set_form.set(FormData::default());
                }
                Err(err) => {
                    log::warn!("Submission failed: {}", err);
                    set_status.set(SubmitStatus::Error(err.user_message()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="submission-form" on:submit=on_submit>
            <h2>"SUBMIT YOUR PROJECT"</h2>

            {move || match status.get() {
                SubmitStatus::Idle => None,
                SubmitStatus::Success(receipt) => Some(view! {
                    <div class="banner success">
                        "✓ Project submitted successfully!"
                        {receipt.commit_url.map(|url| view! {
                            " " <a href=url target="_blank" rel="noopener noreferrer">"View commit"</a>
                        })}
                    </div>
                }.into_any()),
                SubmitStatus::Error(message) => Some(view! {
                    <div class="banner error">{message}</div>
                }.into_any()),
            }}

            <TextField name="title" label="Project name" required=true max_len=TITLE_MAX_LEN
                value=field(|f| &f.title) set_form=set_form />
            <TextField name="projectUrl" label="Project link" kind="url" required=true
                placeholder="https://your-project.example.com"
                value=field(|f| &f.project_url) set_form=set_form />
            <TextField name="repoUrl" label="Repository link" kind="url"
                placeholder="https://github.com/you/project"
                value=field(|f| &f.repo_url) set_form=set_form />

            <label class="form-field">
                <span class="field-label">"Description *"</span>
                <textarea
                    name="description"
                    rows="4"
                    maxlength=DESCRIPTION_MAX_LEN.to_string()
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        set_form.update(|f| f.set_field("description", text));
                    }
                ></textarea>
            </label>

            <TextField name="imageUrl" label="Screenshot URL" kind="url"
                value=field(|f| &f.image_url) set_form=set_form />
            <TextField name="creator" label="Creator name" required=true max_len=CREATOR_MAX_LEN
                value=field(|f| &f.creator) set_form=set_form />
            <TextField name="creatorUrl" label="Creator GitHub" kind="url"
                placeholder="https://github.com/you"
                value=field(|f| &f.creator_url) set_form=set_form />

            <label class="form-field">
                <span class="field-label">"Status"</span>
                <select
                    name="status"
                    prop:value=move || form.with(|f| f.status.as_str())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.set_field("status", value));
                    }
                >
                    {ProjectStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{format!("{} {}", status.symbol(), status.label())}</option>
                    }).collect_view()}
                </select>
            </label>

            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                {move || if submitting.get() { "SUBMITTING..." } else { "SUBMIT PROJECT" }}
            </button>
        </form>
    }
}
