use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::content::{SITE_DESCRIPTION, SITE_TITLE};
use crate::ui::{HomePage, NotFoundPage, provide_animation_context};

/// Canonical URL from the server `Config` provided to the route handlers
#[cfg(feature = "ssr")]
fn canonical_url() -> Option<String> {
    use_context::<crate::core::config::Config>().and_then(|config| config.canonical_url())
}

#[cfg(not(feature = "ssr"))]
fn canonical_url() -> Option<String> {
    None
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let canonical = canonical_url();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {canonical.map(|href| view! { <link rel="canonical" href=href/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One animation controller for the lifetime of the page
    provide_animation_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/jemsonnn.css"/>

        // sets the document title
        <Title text=format!("{} | {}", SITE_TITLE, SITE_DESCRIPTION)/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("") view=HomePage/>
            </Routes>
        </Router>
    }
}
