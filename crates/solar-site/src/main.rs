//! Solar Rewards referral site
//!
//! A client-side Leptos app: referral and coupon redemption forms plus the
//! marketing pages around them.

mod app;
mod components;
mod context;
mod pages;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <app::App/>
        }
    });
}
