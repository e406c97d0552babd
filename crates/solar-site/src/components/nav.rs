//! Site navigation bar

use leptos::*;
use solar_core::{MobileMenu, NavLink, NAV_LINKS};
use crate::context::use_current_page;

const LINK_BASE: &str = "px-3 py-2 rounded-md text-sm font-medium transition-colors";

#[component]
pub fn SiteNav() -> impl IntoView {
    let menu = create_rw_signal(MobileMenu::default());
    let current = use_current_page();

    let link_class = move |link: NavLink| {
        if link.is_active(current.get()) {
            format!("{LINK_BASE} text-orange-600 bg-orange-50")
        } else {
            format!("{LINK_BASE} text-gray-600 hover:text-orange-600")
        }
    };

    view! {
        <nav class="bg-white/95 backdrop-blur-sm border-b border-gray-200 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center space-x-2">
                            <span class="p-2 bg-gradient-to-br from-amber-400 to-orange-500 rounded-lg shadow text-xl">"☀️"</span>
                            <span class="text-xl font-bold text-gray-900">"Solar Rewards"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS.into_iter().map(move |link| {
                            view! {
                                <a href=link.href() class=move || link_class(link)>{link.label}</a>
                            }
                        }).collect::<Vec<_>>()}
                        <button class="px-4 py-2 bg-orange-500 hover:bg-orange-600 text-white text-sm font-medium rounded-lg shadow transition">
                            "Admin Login"
                        </button>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-orange-600"
                            on:click=move |_| menu.update(MobileMenu::toggle)
                        >
                            <Show
                                when=move || menu.with(MobileMenu::is_open)
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>

                // Mobile menu
                <Show when=move || menu.with(MobileMenu::is_open)>
                    <div class="md:hidden py-4 border-t border-gray-200">
                        <div class="flex flex-col space-y-2">
                            {NAV_LINKS.into_iter().map(move |link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class=move || link_class(link)
                                        on:click=move |_| menu.update(MobileMenu::close)
                                    >
                                        {link.label}
                                    </a>
                                }
                            }).collect::<Vec<_>>()}
                            <button class="mt-2 w-fit px-4 py-2 bg-orange-500 text-white text-sm font-medium rounded-lg shadow">
                                "Admin Login"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
