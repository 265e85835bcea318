//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{BRAND, copyright_line};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // 404 icon
                <div class="w-24 h-24 mx-auto mb-6 bg-gray-900 rounded-full flex items-center justify-center">
                    <Icon name=icons::COMPASS class="w-12 h-12" />
                </div>

                // Error code
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Page Not Found"
                </h2>

                // Description
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "This page doesn't exist. Everything lives on the home page."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-indigo-600 hover:bg-indigo-500 text-white font-medium rounded-lg transition-colors"
                >
                    "Back to " {BRAND}
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{copyright_line(None)}</p>
            </div>
        </div>
    }
}
