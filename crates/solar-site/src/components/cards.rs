//! Card components for site pages

use leptos::*;

#[component]
pub fn StepCard(
    number: usize,
    icon: &'static str,
    #[prop(into)] title: String,
    description: &'static str,
    /// Draw the connector arrow to the next step
    #[prop(default = false)]
    arrow: bool,
) -> impl IntoView {
    view! {
        <div class="relative group bg-white rounded-xl shadow hover:shadow-lg transition p-6 text-center">
            <div class="mb-4">
                <span class="inline-flex p-3 bg-gradient-to-br from-amber-400 to-orange-500 rounded-full shadow text-3xl group-hover:scale-110 transition-transform">
                    {icon}
                </span>
            </div>
            <span class="inline-block mb-3 px-3 py-1 bg-orange-100 text-orange-700 text-xs font-semibold rounded-full">
                {format!("Step {number}")}
            </span>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
            <Show when=move || arrow>
                <span class="hidden lg:block absolute top-1/2 -right-5 -translate-y-1/2 text-gray-400 text-2xl">"→"</span>
            </Show>
        </div>
    }
}

#[component]
pub fn BenefitCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow hover:shadow-lg transition p-6 text-center">
            <div class="mx-auto mb-4 p-3 bg-gradient-to-br from-amber-400 to-orange-500 rounded-full w-fit text-3xl">{icon}</div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn FaqCard(
    question: &'static str,
    answer: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{question}</h3>
            <p class="text-gray-600">{answer}</p>
        </div>
    }
}

/// Headline reward amount on the form sidebars
#[component]
pub fn RewardCard(
    icon: &'static str,
    title: &'static str,
    amount: String,
    caption: &'static str,
    items: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 space-y-4">
            <h3 class="flex items-center gap-2 text-lg font-semibold text-gray-900">
                <span class="text-orange-500">{icon}</span>
                {title}
            </h3>
            <div class="text-center p-6 bg-gradient-to-br from-amber-400 to-orange-500 rounded-lg text-white">
                <div class="text-3xl font-bold mb-2">{amount}</div>
                <p class="text-white/90">{caption}</p>
            </div>
            <ul class="space-y-3 text-sm">
                {items.into_iter().map(|item| view! {
                    <li class="flex items-start gap-2">
                        <span class="text-orange-500">"✓"</span>
                        <span>{item}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn HelpCard(
    #[prop(default = "Need Help?")] title: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 space-y-3 text-sm">
            <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            {blurb.map(|blurb| view! { <p class="text-gray-600">{blurb}</p> })}
            <button class="w-full py-2 border border-gray-300 rounded-lg font-medium text-gray-700 hover:bg-gray-50 transition">
                "Contact Support"
            </button>
        </div>
    }
}

#[component]
pub fn NoteCard(
    title: &'static str,
    notes: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 space-y-3 text-sm text-gray-600">
            <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            {notes.into_iter().map(|note| view! { <p>"• "{note}</p> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-block w-fit px-3 py-1 bg-orange-100 text-orange-700 text-sm font-semibold rounded-full">
            {children()}
        </span>
    }
}
