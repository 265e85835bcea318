//! Home page: every section in scroll order

use leptos::prelude::*;

use crate::ui::sections::{About, Contact, Footer, Hero, Navbar, Projects, Skills};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-950 text-gray-100 overflow-x-hidden">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
