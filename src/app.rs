mod components;
mod contact;
mod header;
mod hero;
mod homepage;
mod reveal;
mod sections;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    let name = crate::content::portfolio().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta
            name="description"
            content=crate::content::portfolio().profile.blurb.clone()
        />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <h1 class="text-3xl font-bold">"Page not found."</h1>
            <A
                href="/"
                attr:class="px-6 py-3 bg-gradient-to-r from-teal-500 to-purple-600 text-white rounded-lg font-medium"
            >
                "Back to the portfolio"
            </A>
        </main>
    }
}
