//! Main application component

use leptos::*;
use leptos_router::*;
use solar_core::{Page, CATCH_ALL};
use crate::components::*;
use crate::context::{load_config, provide_site_context, use_current_page};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_site_context(load_config());

    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path=CATCH_ALL view=CurrentPage/>
                    </Routes>
                </main>
                <ToastHost/>
            </div>
        </Router>
    }
}

/// Renders whatever `Page::resolve` makes of the current location
#[component]
fn CurrentPage() -> impl IntoView {
    let page = use_current_page();

    move || match page.get() {
        Page::Home => view! { <HomePage/> }.into_view(),
        Page::Refer => view! { <ReferPage/> }.into_view(),
        Page::Redeem => view! { <RedeemPage/> }.into_view(),
        Page::HowItWorks => view! { <HowItWorksPage/> }.into_view(),
        Page::NotFound => view! { <NotFoundPage/> }.into_view(),
    }
}
