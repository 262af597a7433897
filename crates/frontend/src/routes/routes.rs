use crate::domain::a001_resource::ui::details::ResourcePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h2>"Nothing here"</h2>
            <p>"Open a resource at /resources/{id}."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    // One route for every tab so the page survives tab switches
                    <Route path=path!("/resources/:id/:page?") view=ResourcePage />
                </Routes>
            </main>
        </Router>
    }
}
