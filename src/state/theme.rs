/// Class on `<html>` that switches the stylesheet into dark mode.
pub const DARK_CLASS: &str = "dark";

/// Visual mode of the page. Maps 1:1 onto the `dark` class of `<html>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class applied to the document element, if any.
    pub fn document_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some(DARK_CLASS),
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Owns the page theme for one view. Seeded once from the ambient
/// color-scheme preference, afterwards only user toggles change it.
/// Nothing is persisted; a reload starts over from the ambient preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeController {
    theme: Theme,
    seeded: bool,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Applies the ambient preference. `None` means the host cannot answer
    /// the query and is treated as "no preference". Only the first call has
    /// an effect; returns whether the theme changed.
    pub fn initialize(&mut self, ambient_dark: Option<bool>) -> bool {
        if self.seeded {
            return false;
        }
        self.seeded = true;
        let next = Theme::from_dark(ambient_dark.unwrap_or(false));
        let changed = next != self.theme;
        self.theme = next;
        changed
    }

    pub fn toggle(&mut self) -> Theme {
        // a toggle before the mount effect ran wins over the ambient preference
        self.seeded = true;
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initialize_from_ambient_preference() {
        let mut dark = ThemeController::new();
        assert!(dark.initialize(Some(true)));
        assert_eq!(dark.theme(), Theme::Dark);
        assert_eq!(dark.theme().document_class(), Some("dark"));

        let mut light = ThemeController::new();
        assert!(!light.initialize(Some(false)));
        assert_eq!(light.theme(), Theme::Light);
        assert_eq!(light.theme().document_class(), None);
    }

    #[test]
    fn test_unsupported_query_defaults_to_light() {
        let mut controller = ThemeController::new();
        controller.initialize(None);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_initialize_only_applies_once() {
        let mut controller = ThemeController::new();
        controller.initialize(Some(true));
        controller.toggle();
        // later preference reads are ignored
        assert!(!controller.initialize(Some(true)));
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_before_initialize_keeps_user_choice() {
        let mut controller = ThemeController::new();
        controller.toggle();
        controller.initialize(Some(false));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    proptest! {
        #[test]
        fn toggles_follow_parity(ambient in any::<bool>(), n in 0usize..64) {
            let mut controller = ThemeController::new();
            controller.initialize(Some(ambient));
            for _ in 0..n {
                controller.toggle();
            }
            prop_assert_eq!(controller.theme().is_dark(), ambient ^ (n % 2 == 1));
        }
    }
}
