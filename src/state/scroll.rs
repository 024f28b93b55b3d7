/// Fraction of the scrollable distance covered by `offset`, clamped to [0, 1].
///
/// The scrollable distance is `scroll_height - viewport_height`. A document
/// that fits in the viewport (or nonsense input) reports 0.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !offset.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 0.25);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        // rubber-band scrolling reports offsets outside the document
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_unscrollable_document() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    proptest! {
        #[test]
        fn progress_is_bounded_and_monotonic(
            height in 1.0f64..100_000.0,
            viewport in 1.0f64..5_000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let scroll_height = height + viewport;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = scroll_progress(lo * height, scroll_height, viewport);
            let p_hi = scroll_progress(hi * height, scroll_height, viewport);
            prop_assert!((0.0..=1.0).contains(&p_lo));
            prop_assert!((0.0..=1.0).contains(&p_hi));
            prop_assert!(p_lo <= p_hi);
        }
    }
}
