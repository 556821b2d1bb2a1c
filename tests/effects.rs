mod tests {
    use keyglow_engine::effect::{self, EffectId};
    use keyglow_engine::{AnimationState, BrightnessRange, Hsb, Rgb, hsb_to_rgb};

    fn state_with(effect: EffectId) -> AnimationState {
        AnimationState {
            color: Hsb::new(180, 100, 100),
            speed: 1,
            effect,
            phase_step: 0,
            on: true,
            status_active: false,
            status_step: 0,
        }
    }

    #[test]
    fn test_solid_fills_and_holds_phase() {
        let mut state = state_with(EffectId::Solid);
        let range = BrightnessRange::new(20, 80).unwrap();
        let mut pixels = [Rgb::default(); 4];

        effect::render(&mut state, range, &mut pixels);

        let expected = hsb_to_rgb(range.scale_min_max(Hsb::new(180, 100, 100)));
        assert!(pixels.iter().all(|&px| px == expected));
        assert_eq!(state.phase_step, 0);
    }

    #[test]
    fn test_breathe_trough_is_black() {
        let mut state = state_with(EffectId::Breathe);
        state.phase_step = 1200;
        let mut pixels = [Rgb::default(); 4];

        effect::render(&mut state, BrightnessRange::full(), &mut pixels);

        assert!(pixels.iter().all(|&px| px == Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_breathe_peak_at_phase_zero() {
        let mut state = state_with(EffectId::Breathe);
        let mut pixels = [Rgb::default(); 4];

        effect::render(&mut state, BrightnessRange::full(), &mut pixels);

        let expected = hsb_to_rgb(Hsb::new(180, 100, 100));
        assert!(pixels.iter().all(|&px| px == expected));
        assert_eq!(state.phase_step, 10);
    }

    #[test]
    fn test_breathe_period() {
        let mut state = state_with(EffectId::Breathe);
        let mut pixels = [Rgb::default(); 4];

        // speed 1 advances 10 steps per tick; the phase reaches 2400 after
        // 240 ticks and wraps to zero on the next one.
        for _ in 0..240 {
            effect::render(&mut state, BrightnessRange::full(), &mut pixels);
        }
        assert_eq!(state.phase_step, 2400);

        effect::render(&mut state, BrightnessRange::full(), &mut pixels);
        assert_eq!(state.phase_step, 0);
    }

    #[test]
    fn test_spectrum_advances_and_wraps() {
        let mut state = state_with(EffectId::Spectrum);
        state.phase_step = 358;
        state.speed = 5;
        let mut pixels = [Rgb::default(); 4];

        effect::render(&mut state, BrightnessRange::full(), &mut pixels);

        let expected = hsb_to_rgb(Hsb::new(358, 100, 100));
        assert!(pixels.iter().all(|&px| px == expected));
        assert_eq!(state.phase_step, 3);
    }

    #[test]
    fn test_swirl_spreads_hue_across_strip() {
        let mut state = state_with(EffectId::Swirl);
        state.phase_step = 30;
        let mut pixels = [Rgb::default(); 4];

        effect::render(&mut state, BrightnessRange::full(), &mut pixels);

        for (i, &px) in pixels.iter().enumerate() {
            let hue = (90 * i as u16 + 30) % 360;
            assert_eq!(px, hsb_to_rgb(Hsb::new(hue, 100, 100)));
        }
        assert_eq!(state.phase_step, 32);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(EffectId::Solid.cycled(-1), EffectId::Swirl);
        assert_eq!(EffectId::Swirl.cycled(1), EffectId::Solid);
        assert_eq!(EffectId::Breathe.cycled(1), EffectId::Spectrum);
    }

    #[test]
    fn test_effect_id_raw_round_trip() {
        for raw in 0..4 {
            assert_eq!(EffectId::from_raw(raw).unwrap().as_raw(), raw);
        }
        assert_eq!(EffectId::from_raw(4), None);
    }

    #[test]
    fn test_effect_id_names() {
        assert_eq!(EffectId::Breathe.as_str(), "breathe");
        assert_eq!(EffectId::parse_from_str("swirl"), Some(EffectId::Swirl));
        assert_eq!(EffectId::parse_from_str("disco"), None);
    }
}
