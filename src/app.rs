use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::{DashboardPage, SubmitPage};
use crate::store::StoreProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <StoreProvider>
            <AppContent/>
        </StoreProvider>
    }
}

#[component]
fn AppContent() -> impl IntoView {
    provide_meta_context();

    view! {
        // External stylesheets
        <Stylesheet id="ionicons" href="https://code.ionicframework.com/ionicons/2.0.1/css/ionicons.min.css"/>
        <Stylesheet id="app-css" href="/pkg/comment-analyzer.css"/>

        <Title text="YouTube Comment Analyzer"/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SubmitPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </main>
        </Router>
    }
}
