use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window, use_window_size, UseWindowSizeReturn};

use super::components::{PrimaryButton, SecondaryButton, TechIcon, GRADIENT_TEXT};
use crate::content::{image_or_placeholder, Icon, Profile};
use crate::state::PointerParallax;

/// Tracks the pointer over the window for as long as the calling component
/// is mounted and returns the background transform derived from it.
fn use_pointer_parallax() -> Signal<String> {
    let pointer = RwSignal::new(PointerParallax::default());
    let UseWindowSizeReturn { width, height } = use_window_size();

    let stop = use_event_listener(use_window(), ev::mousemove, move |e: ev::MouseEvent| {
        let (x, y) = (e.client_x() as f64, e.client_y() as f64);
        pointer.update(|p| p.track(x, y));
    });
    on_cleanup(move || {
        log::debug!("releasing parallax pointer listener");
        stop();
    });

    Signal::derive(move || {
        let mut p = pointer.get();
        p.resize(width.get(), height.get());
        p.transform()
    })
}

#[component]
pub fn Hero(profile: Profile, tech: Vec<String>) -> impl IntoView {
    let parallax = use_pointer_parallax();
    let portrait = image_or_placeholder(profile.hero_image.as_deref()).to_string();
    let first_name = profile.name.split_whitespace().next().unwrap_or_default().to_string();

    view! {
        <section class="relative min-h-screen flex items-center pt-16">
            <div
                class="absolute inset-0 pointer-events-none z-0 transition-transform duration-500 ease-out"
                style:transform=move || parallax.get()
            >
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-purple-400/10 dark:bg-purple-500/10 rounded-full blur-3xl" />
                <div class="absolute bottom-1/4 right-1/4 w-64 h-64 bg-teal-400/10 dark:bg-teal-500/10 rounded-full blur-3xl" />
            </div>

            <div class="absolute inset-0 bg-grid-pattern opacity-[0.02] pointer-events-none" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="max-w-2xl intro">
                        <div class="intro-item inline-block px-4 py-1.5 mb-6 text-sm font-medium rounded-full bg-gradient-to-r from-teal-500/10 to-purple-500/10 text-teal-500 dark:text-teal-400 border border-teal-500/20 delay-100">
                            {profile.badge}
                        </div>
                        <h1 class="intro-item text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight delay-200">
                            "Hi, I'm "
                            <span class="relative">
                                <span class=GRADIENT_TEXT>{profile.name}</span>
                                <span class="underline-grow absolute -bottom-2 left-0 w-full h-1 bg-gradient-to-r from-teal-500 to-purple-600 rounded-full" />
                            </span>
                        </h1>
                        <p class="intro-item text-xl md:text-2xl text-gray-600 dark:text-gray-400 mb-8 leading-relaxed delay-400">
                            {profile.tagline}
                        </p>
                        <div class="intro-item flex flex-col sm:flex-row gap-4 delay-600">
                            <PrimaryButton href="#projects" label="View My Work" icon=Icon::Arrow />
                            <SecondaryButton href="#contact" label="Contact Me" icon=Icon::Mail />
                        </div>

                        <div class="intro-item flex flex-wrap gap-6 mt-12 delay-800">
                            {tech.into_iter().map(|name| view! { <TechIcon name /> }).collect_view()}
                        </div>
                    </div>

                    <div class="relative hidden lg:block intro-item delay-300">
                        <div class="relative w-full h-[500px]">
                            <div class="absolute inset-0 rounded-2xl overflow-hidden border-2 border-white/20 dark:border-gray-800/50 shadow-2xl transition-transform hover:-translate-x-1 hover:-translate-y-1">
                                <img src=portrait alt="Developer" class="w-full h-full object-cover" />
                            </div>

                            <div class="absolute -bottom-6 -right-6 w-64 h-64 rounded-full bg-gradient-to-br from-teal-500/20 to-purple-500/20 blur-2xl animate-breathe" />

                            <CodeSnippet first_name />
                        </div>
                    </div>
                </div>

                <div class="intro-item delay-1000 absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center">
                    <span class="text-sm text-gray-500 dark:text-gray-400 mb-2">"Scroll Down"</span>
                    <div class="w-6 h-10 border-2 border-gray-400 dark:border-gray-600 rounded-full flex justify-center pt-1 animate-scroll-hint">
                        <div class="w-1.5 h-1.5 bg-gray-400 dark:bg-gray-600 rounded-full" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CodeSnippet(first_name: String) -> impl IntoView {
    view! {
        <div class="absolute -top-10 -left-10 w-40 h-40 bg-white dark:bg-gray-800 rounded-lg shadow-xl p-4 font-mono text-xs overflow-hidden -rotate-6 transition-transform hover:rotate-0 hover:scale-105">
            <div class="text-gray-400">"// portfolio.rs"</div>
            <div class="mt-2">
                <span class="text-purple-500">"let"</span>
                " "
                <span class="text-teal-500">"developer"</span>
                " = "
                <span class="text-purple-500">"Dev {"</span>
            </div>
            <div class="ml-4">
                <span class="text-teal-400">"name:"</span>
                " "
                <span class="text-amber-500">{format!("\"{first_name}\"")}</span>
                ","
            </div>
            <div class="ml-4">
                <span class="text-teal-400">"skills:"</span>
                " "
                <span class="text-amber-500">"[\"React\", \"Node.js\", \"Python\"]"</span>
                ","
            </div>
            <div class="text-purple-500">"}"</div>
        </div>
    }
}
