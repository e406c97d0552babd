//! Toast notifications

use leptos::*;
use solar_core::NotificationKind;
use crate::context::{use_site, Toast};

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_site().notifier;

    view! {
        <div class="fixed bottom-4 right-4 z-50 w-full max-w-sm space-y-3 px-4" aria-live="polite">
            <For
                each=move || notifier.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let (frame, icon) = match toast.notification.kind {
                        NotificationKind::Success => ("border-green-500 bg-white", "✓"),
                        NotificationKind::Error => ("border-red-500 bg-red-50", "!"),
                    };
                    view! {
                        <div class=format!("flex items-start gap-3 rounded-lg border-l-4 shadow-lg p-4 {frame}") role="status">
                            <span class="text-lg font-bold">{icon}</span>
                            <div class="flex-1">
                                <p class="font-semibold text-gray-900">{toast.notification.title}</p>
                                <p class="text-sm text-gray-600 mt-1">{toast.notification.description}</p>
                            </div>
                            <button
                                class="text-gray-400 hover:text-gray-600"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
