use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::state::{Theme, ThemeController, DARK_CLASS};

/// Page-scoped theme handle handed to the components that read or flip it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(RwSignal<ThemeController>);

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.0.with(|c| c.theme())
    }

    pub fn toggle(&self) {
        self.0.update(|c| {
            let theme = c.toggle();
            log::debug!("theme toggled to {theme:?}");
        });
    }
}

pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext(RwSignal::new(ThemeController::new()));
    provide_context(ctx);

    let prefers_dark = use_preferred_dark();

    // seed from the host preference once; effects only run in the browser
    Effect::new(move |_| {
        let ambient = Some(prefers_dark.get_untracked());
        ctx.0.update(|c| {
            if c.initialize(ambient) {
                log::debug!("theme seeded from color-scheme preference: {ambient:?}");
            }
        });
    });

    Effect::new(move |_| sync_document_theme(ctx.theme()));

    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// The one place the theme touches the document.
fn sync_document_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = match theme.document_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(DARK_CLASS),
    };
    if let Err(e) = res {
        log::warn!("couldn't update document theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-gray-800 transition-transform hover:scale-110 active:scale-95"
            aria-label=move || theme.theme().toggle_label()
            on:click=move |_| theme.toggle()
        >
            <i class=move || {
                if theme.theme().is_dark() { "extra-sun text-xl" } else { "extra-moon text-xl" }
            } />
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_starts_light() {
        Owner::new().with(|| {
            let ctx = provide_theme();
            assert_eq!(ctx.theme(), Theme::Light);
            assert_eq!(use_theme().theme(), Theme::Light);
        });
    }

    #[test]
    fn test_toggle_through_context() {
        Owner::new().with(|| {
            let ctx = provide_theme();
            use_theme().toggle();
            assert_eq!(ctx.theme(), Theme::Dark);
            assert_eq!(ctx.theme().document_class(), Some(DARK_CLASS));
        });
    }
}
