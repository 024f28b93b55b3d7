/// In-page anchors shown in both the desktop bar and the mobile overlay.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Education", "#education"),
    ("Contact", "#contact"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn open(self) -> Self {
        Self::Open
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Choosing a link always closes the overlay; the anchor is handed back
    /// so the caller performs the navigation.
    pub fn navigate(self, href: &str) -> (Self, String) {
        (Self::Closed, href.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        let menu = menu.open();
        assert!(menu.is_open());
        assert_eq!(menu.close(), MobileMenu::Closed);
        // closing twice is harmless
        assert_eq!(MobileMenu::Closed.close(), MobileMenu::Closed);
    }

    #[test]
    fn test_navigate_closes_menu() {
        for (_, href) in NAV_ITEMS {
            let (menu, target) = MobileMenu::Closed.open().navigate(href);
            assert_eq!(menu, MobileMenu::Closed);
            assert_eq!(target, href);
        }
    }

    #[test]
    fn test_nav_items_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
