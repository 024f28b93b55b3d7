use leptos::prelude::*;
use leptos_router::components::A;

use super::components::Brand;
use super::theme::ThemeToggle;
use crate::state::{MobileMenu, NAV_ITEMS};

#[component]
pub fn Header(#[prop(into)] initial: String, #[prop(into)] name: String) -> impl IntoView {
    let (menu, set_menu) = signal(MobileMenu::Closed);
    let (bar_initial, bar_name) = (initial.clone(), name.clone());

    let close = move || {
        set_menu.update(|m| *m = m.close());
    };
    let navigate = move |href: &'static str| {
        set_menu.update(|m| {
            let (next, target) = m.navigate(href);
            log::debug!("mobile nav to {target}");
            *m = next;
        });
    };

    view! {
        <header class="fixed w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md z-40 border-b border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <A href="/" attr:class="text-xl font-bold flex items-center gap-2">
                        <Brand initial=bar_initial name=bar_name />
                    </A>

                    <nav class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(label, href)| view! { <NavLink href label /> })
                            .collect_view()}
                        <ThemeToggle />
                    </nav>

                    <div class="flex md:hidden items-center gap-4">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="p-2 rounded-md hover:bg-gray-200 dark:hover:bg-gray-800 transition-transform hover:scale-110 active:scale-95"
                            aria-label="Open menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=move |_| set_menu.update(|m| *m = m.open())
                        >
                            <i class="extra-menu text-2xl" />
                        </button>
                    </div>
                </div>
            </div>
        </header>

        <Show when=move || menu.get().is_open()>
            <div class="fixed inset-0 z-50 bg-gray-900/80 backdrop-blur-sm md:hidden overlay-fade">
                <div class="fixed inset-y-0 right-0 w-full max-w-sm bg-white dark:bg-gray-900 shadow-lg p-6 overlay-slide">
                    <div class="flex items-center justify-between mb-8">
                        <a
                            href="/"
                            class="text-xl font-bold flex items-center gap-2"
                            on:click=move |_| navigate("/")
                        >
                            <Brand initial=initial.clone() name=name.clone() />
                        </a>
                        <button
                            type="button"
                            class="p-2 rounded-md hover:bg-gray-200 dark:hover:bg-gray-800 transition-transform hover:scale-110 active:scale-95"
                            aria-label="Close menu"
                            on:click=move |_| close()
                        >
                            <i class="extra-close text-2xl" />
                        </button>
                    </div>
                    <nav class="flex flex-col gap-4">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=href
                                        class="block py-3 text-lg hover:text-teal-500 dark:hover:text-teal-400 transition-all hover:translate-x-1 border-b border-gray-100 dark:border-gray-800"
                                        on:click=move |_| navigate(href)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-gray-600 dark:text-gray-300 hover:text-teal-500 dark:hover:text-teal-400 transition-all hover:-translate-y-0.5 relative group"
        >
            {label}
            <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-teal-500 to-purple-600 transition-all group-hover:w-full" />
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::theme::provide_theme;
    use leptos_router::{components::Router, location::RequestUrl};

    #[test]
    fn test_header_renders_closed_menu() {
        let html = Owner::new().with(|| {
            provide_context(RequestUrl::new("/"));
            provide_theme();
            view! {
                <Router>
                    <Header initial="S" name="Kumara" />
                </Router>
            }
            .to_html()
        });

        // the overlay's brand copy only exists while the menu is open
        assert_eq!(html.matches("Kumara").count(), 1);
        assert!(html.contains("aria-expanded=\"false\""));
        for (label, href) in NAV_ITEMS {
            assert!(html.contains(&format!("href=\"{href}\"")));
            assert!(html.contains(label));
        }
        assert!(!html.contains("Close menu"));
    }
}
