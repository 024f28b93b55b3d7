/// Portion of a section header that must be visible before it animates in.
pub const SECTION_THRESHOLD: f64 = 0.2;

/// One-shot visibility latch for an entrance animation.
///
/// The only transition is `Unseen -> Seen`; there is no way back, so an
/// element animates in once per page load and never replays on scroll-back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Unseen,
    Seen,
}

impl Reveal {
    /// Feeds one intersection observation into the latch.
    pub fn observe(self, ratio: f64, threshold: f64) -> Self {
        match self {
            Self::Seen => Self::Seen,
            // threshold 0 still requires the element to intersect at all
            Self::Unseen if ratio > 0.0 && ratio >= threshold => Self::Seen,
            Self::Unseen => Self::Unseen,
        }
    }

    /// Same as [`Reveal::observe`] for observers that only report whether the
    /// element intersects (threshold 0).
    pub fn observe_intersecting(self, is_intersecting: bool) -> Self {
        if is_intersecting {
            Self::Seen
        } else {
            self
        }
    }

    pub fn is_seen(self) -> bool {
        matches!(self, Self::Seen)
    }

    /// Class suffix used by the entrance-animation styles.
    pub fn class(self) -> &'static str {
        match self {
            Self::Unseen => "reveal-hidden",
            Self::Seen => "reveal-shown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_latches_at_threshold() {
        let r = Reveal::default();
        assert_eq!(r.observe(0.1, SECTION_THRESHOLD), Reveal::Unseen);
        assert_eq!(r.observe(0.2, SECTION_THRESHOLD), Reveal::Seen);
        assert_eq!(r.observe(0.9, SECTION_THRESHOLD), Reveal::Seen);
    }

    #[test]
    fn test_zero_threshold_needs_intersection() {
        let r = Reveal::Unseen;
        assert_eq!(r.observe(0.0, 0.0), Reveal::Unseen);
        assert_eq!(r.observe(0.01, 0.0), Reveal::Seen);
        assert_eq!(r.observe_intersecting(false), Reveal::Unseen);
        assert_eq!(r.observe_intersecting(true), Reveal::Seen);
    }

    #[test]
    fn test_scroll_back_does_not_reset() {
        let r = Reveal::Unseen
            .observe(0.5, SECTION_THRESHOLD)
            .observe(0.0, SECTION_THRESHOLD)
            .observe_intersecting(false);
        assert!(r.is_seen());
        assert_eq!(r.class(), "reveal-shown");
    }

    proptest! {
        #[test]
        fn seen_is_absorbing(
            ratios in prop::collection::vec(0.0f64..=1.0, 0..32),
            threshold in 0.0f64..=1.0,
        ) {
            let mut r = Reveal::Seen;
            for ratio in ratios {
                r = r.observe(ratio, threshold);
                prop_assert!(r.is_seen());
            }
        }
    }
}
