use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_document, use_window_scroll, use_window_size, UseWindowSizeReturn};

use super::contact::Contact;
use super::header::Header;
use super::hero::Hero;
use super::sections::{About, Education, Footer, Projects, Skills};
use crate::content::portfolio;
use crate::state::scroll_progress;

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = portfolio();
    let profile = &portfolio.profile;

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors duration-300 overflow-hidden">
            <ScrollProgress />

            <div class="fixed inset-0 overflow-hidden pointer-events-none z-0">
                <div class="absolute -top-[30%] -left-[10%] w-[70%] h-[70%] rounded-full bg-gradient-to-br from-purple-200/20 to-transparent dark:from-purple-900/10 blur-3xl" />
                <div class="absolute -bottom-[30%] -right-[10%] w-[70%] h-[70%] rounded-full bg-gradient-to-tl from-teal-200/20 to-transparent dark:from-teal-900/10 blur-3xl" />
            </div>

            <Header initial=profile.initial.clone() name=profile.name.clone() />

            <main>
                <Hero profile=profile.clone() tech=portfolio.tech.clone() />
                <About portfolio />
                <Skills portfolio />
                <Projects portfolio />
                <Education portfolio />
                <Contact portfolio />
            </main>

            <Footer portfolio />
        </div>
    }
}

/// Fixed bar across the top whose width follows how far the page is scrolled.
#[component]
fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();

    let progress = Memo::new(move |_| {
        let offset = scroll_y.get();
        let viewport = height.get();
        // no document while rendering on the server
        let document: Option<web_sys::Document> = (*use_document()).clone();
        let scroll_height = document
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        scroll_progress(offset, scroll_height, viewport)
    });

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-purple-500 via-teal-500 to-purple-500 z-50 origin-left"
            role="progressbar"
            aria-label="Reading progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            style:transform=move || format!("scaleX({:.4})", progress.get())
        />
    }
}
