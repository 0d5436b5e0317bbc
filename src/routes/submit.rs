use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::error::{INVALID_URL_MESSAGE, PRECHECK_FAILED_MESSAGE};
use crate::store::PrecheckVideoAction;
use crate::validation::validate_youtube_url;

/// Landing form: validates the URL locally, asks the backend to fetch the
/// comments, then hands the URL to the dashboard through history state.
#[component]
pub fn SubmitPage() -> impl IntoView {
    let precheck = create_server_action::<PrecheckVideoAction>();
    let result_of_call = precheck.value();
    let pending = precheck.pending();
    let navigate = use_navigate();

    let (error_message, set_error_message) = create_signal(None::<String>);
    let submitted_url = create_rw_signal(String::new());

    create_effect(move |_| {
        if let Some(outcome) = result_of_call.get() {
            match outcome {
                Ok(()) => {
                    set_error_message.set(None);
                    let url = submitted_url.get_untracked();
                    tracing::info!("pre-check passed, opening dashboard for {url}");
                    navigate("/dashboard", dashboard_navigation(url));
                }
                Err(x) => {
                    tracing::error!("Problem during pre-check: {x:?}");
                    set_error_message.set(Some(PRECHECK_FAILED_MESSAGE.into()));
                }
            }
        }
    });

    let input_class = move || {
        if error_message.with(Option::is_some) {
            "form-control form-control-lg is-invalid"
        } else {
            "form-control form-control-lg"
        }
    };

    view! {
        <Title text="YouTube Comment Analyzer"/>
        <div class="submit-page">
            <div class="submit-container">
                <div class="submit-header">
                    <i class="ion-social-youtube brand-icon"></i>
                    <h1>"YouTube Comment Analyzer"</h1>
                    <p>"Analyze sentiment and trends from YouTube video comments"</p>
                </div>

                <div class="card">
                    <ActionForm
                        action=precheck
                        on:submit=move |ev| {
                            let Ok(data) = PrecheckVideoAction::from_event(&ev) else {
                                return ev.prevent_default();
                            };
                            set_error_message.set(None);
                            let url = data.video_url.trim().to_string();
                            if !validate_youtube_url(&url) {
                                set_error_message.set(Some(INVALID_URL_MESSAGE.into()));
                                ev.prevent_default();
                                return;
                            }
                            submitted_url.set(url);
                        }
                    >
                        <fieldset class="form-group" disabled=move || pending.get()>
                            <label for="video_url">"YouTube Video URL"</label>
                            <input
                                id="video_url"
                                name="video_url"
                                class=input_class
                                type="text"
                                placeholder="https://www.youtube.com/watch?v=..."
                                aria-label="YouTube video URL"
                            />
                            <p class="error-messages">
                                {move || error_message.get().unwrap_or_default()}
                            </p>
                        </fieldset>
                        <button
                            class="btn btn-lg btn-primary submit-button"
                            class:is-pending=move || pending.get()
                            type="submit"
                            disabled=move || pending.get()
                        >
                            <Show
                                when=move || pending.get()
                                fallback=|| view! { <i class="ion-search"></i>" Analyze Comments" }
                            >
                                <span class="spinner small" aria-hidden="true"></span>
                                "Analyzing..."
                            </Show>
                        </button>
                    </ActionForm>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn dashboard_navigation(url: String) -> NavigateOptions {
    NavigateOptions {
        state: leptos_router::State(Some(wasm_bindgen::JsValue::from_str(&url))),
        ..Default::default()
    }
}

#[cfg(not(feature = "hydrate"))]
fn dashboard_navigation(_url: String) -> NavigateOptions {
    NavigateOptions::default()
}
