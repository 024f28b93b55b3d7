/// Maximum background displacement in pixels, either direction.
pub const PARALLAX_RANGE: f64 = 10.0;

/// Maps a pointer coordinate in `[0, extent]` linearly onto
/// `[+PARALLAX_RANGE, -PARALLAX_RANGE]`. Coordinates outside the viewport are
/// clamped. An unknown or empty viewport is treated as 1px wide.
pub fn parallax_offset(position: f64, extent: f64) -> f64 {
    let extent = if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        1.0
    };
    if !position.is_finite() {
        return 0.0;
    }
    let t = (position / extent).clamp(0.0, 1.0);
    PARALLAX_RANGE - 2.0 * PARALLAX_RANGE * t
}

/// Latest pointer position over the viewport plus the viewport size used to
/// derive the hero background translation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerParallax {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerParallax {
    pub fn track(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// (dx, dy) translation in pixels.
    pub fn offset(&self) -> (f64, f64) {
        (
            parallax_offset(self.x, self.width),
            parallax_offset(self.y, self.height),
        )
    }

    pub fn transform(&self) -> String {
        let (dx, dy) = self.offset();
        format!("translate3d({dx:.2}px, {dy:.2}px, 0)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_offset_endpoints() {
        assert_eq!(parallax_offset(0.0, 1280.0), 10.0);
        assert_eq!(parallax_offset(1280.0, 1280.0), -10.0);
        assert_eq!(parallax_offset(640.0, 1280.0), 0.0);
        assert_eq!(parallax_offset(320.0, 1280.0), 5.0);
    }

    #[test]
    fn test_offset_is_clamped() {
        assert_eq!(parallax_offset(-50.0, 1280.0), 10.0);
        assert_eq!(parallax_offset(2000.0, 1280.0), -10.0);
    }

    #[test]
    fn test_unknown_viewport() {
        assert_eq!(parallax_offset(0.0, 0.0), 10.0);
        assert_eq!(parallax_offset(5.0, f64::NAN), -10.0);
    }

    #[test]
    fn test_pointer_tracking() {
        let mut p = PointerParallax::default();
        p.resize(1000.0, 800.0);
        assert_eq!(p.offset(), (10.0, 10.0));
        p.track(1000.0, 400.0);
        assert_eq!(p.offset(), (-10.0, 0.0));
        assert_eq!(p.transform(), "translate3d(-10.00px, 0.00px, 0)");
        p.resize(2000.0, 800.0);
        assert_eq!(p.offset(), (0.0, 0.0));
    }

    proptest! {
        #[test]
        fn offset_is_linear_and_symmetric(extent in 1.0f64..4000.0, t in 0.0f64..=1.0) {
            let offset = parallax_offset(t * extent, extent);
            prop_assert!((offset - (10.0 - 20.0 * t)).abs() < 1e-9);
            let mirrored = parallax_offset((1.0 - t) * extent, extent);
            prop_assert!((offset + mirrored).abs() < 1e-9);
        }
    }
}
