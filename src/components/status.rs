use leptos::*;
use leptos_router::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-page">
            <div class="status-body">
                <div class="spinner" aria-hidden="true"></div>
                <h2>{message}</h2>
            </div>
        </div>
    }
}

/// Full-page failure state. The only way out is back to the form.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="status-page">
            <div class="status-body error-panel" role="alert">
                <div class="error-icon">"⚠️"</div>
                <h2>"Error Loading Data"</h2>
                <p class="error-messages">{message}</p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "Try Again"
                </button>
            </div>
        </div>
    }
}
