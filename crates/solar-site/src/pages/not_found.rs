//! Fallback for unknown paths

use leptos::*;
use leptos_router::use_location;
use tracing::warn;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    warn!(%path, "no page for requested path");

    view! {
        <div class="min-h-[70vh] flex items-center justify-center bg-gray-50">
            <div class="text-center px-4">
                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-2">"Oops! Page not found"</p>
                <p class="text-sm text-gray-500 mb-8 font-mono">{path}</p>
                <a href="/" class="px-6 py-3 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg shadow transition">
                    "Return to Home"
                </a>
            </div>
        </div>
    }
}
