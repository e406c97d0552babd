//! Labelled form inputs

use leptos::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500";

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        format!("{label} (Optional)")
    }
}

fn control_class(extra_class: &str) -> String {
    if extra_class.is_empty() {
        INPUT_CLASS.to_string()
    } else {
        format!("{INPUT_CLASS} {extra_class}")
    }
}

/// Controlled text input. The form owns the value; the input only reports
/// keystrokes through `on_input`. Setting `rows` renders a textarea.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = true)] required: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] hint: Option<&'static str>,
    #[prop(default = "")] extra_class: &'static str,
) -> impl IntoView {
    let class = control_class(extra_class);

    let control = match rows {
        Some(rows) => view! {
            <textarea
                id=id
                name=id
                rows=rows
                required=required
                placeholder=placeholder
                class=class
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        }
        .into_view(),
        None => view! {
            <input
                id=id
                name=id
                type=input_type
                required=required
                placeholder=placeholder
                class=class
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view(),
    };

    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm font-medium text-gray-700">{label_text(label, required)}</label>
            {control}
            {hint.map(|hint| view! { <p class="text-sm text-gray-500">{hint}</p> })}
        </div>
    }
}
