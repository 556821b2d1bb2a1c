mod tests {
    use keyglow_engine::{FULL_WEIGHT, FrameCompositor, Rgb};

    const BASE: Rgb = Rgb {
        r: 200,
        g: 100,
        b: 40,
    };
    const OVERLAY: Rgb = Rgb {
        r: 10,
        g: 250,
        b: 0,
    };

    fn loaded() -> FrameCompositor<3> {
        let mut compositor = FrameCompositor::new();
        compositor.base_mut().fill(BASE);
        compositor.overlay_mut().fill(OVERLAY);
        compositor
    }

    #[test]
    fn test_weight_zero_passes_base() {
        let mut compositor = loaded();
        let frame = compositor.compose(0, 100);
        assert!(frame.iter().all(|&px| px == BASE));
    }

    #[test]
    fn test_full_weight_passes_overlay() {
        let mut compositor = loaded();
        let frame = compositor.compose(FULL_WEIGHT, 100);
        assert!(frame.iter().all(|&px| px == OVERLAY));
    }

    #[test]
    fn test_midpoint_mix_uses_integer_shifts() {
        let mut compositor = loaded();
        let frame = compositor.compose(128, 100);

        let mix = |over: u8, under: u8| {
            ((u16::from(over) * 128) >> 8) as u8 + ((u16::from(under) * 128) >> 8) as u8
        };
        let expected = Rgb {
            r: mix(OVERLAY.r, BASE.r),
            g: mix(OVERLAY.g, BASE.g),
            b: mix(OVERLAY.b, BASE.b),
        };
        assert!(frame.iter().all(|&px| px == expected));
    }

    #[test]
    fn test_low_charge_halves_output() {
        let mut compositor = loaded();
        let frame = compositor.compose(0, 15);

        let expected = Rgb {
            r: BASE.r >> 1,
            g: BASE.g >> 1,
            b: BASE.b >> 1,
        };
        assert!(frame.iter().all(|&px| px == expected));
    }

    #[test]
    fn test_critical_charge_blacks_out_base() {
        let mut compositor = loaded();
        let frame = compositor.compose(0, 5);
        assert!(frame.iter().all(|&px| px == Rgb::default()));
    }

    #[test]
    fn test_critical_charge_keeps_overlay_dimmed() {
        let mut compositor = loaded();
        let frame = compositor.compose(FULL_WEIGHT, 5);

        let expected = Rgb {
            r: OVERLAY.r >> 1,
            g: OVERLAY.g >> 1,
            b: OVERLAY.b >> 1,
        };
        assert!(frame.iter().all(|&px| px == expected));
    }

    #[test]
    fn test_clear_base() {
        let mut compositor = loaded();
        compositor.clear_base();
        assert!(compositor.base().iter().all(|&px| px == Rgb::default()));
    }
}
