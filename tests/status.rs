mod tests {
    use keyglow_engine::{
        ActiveTransport, FULL_WEIGHT, IndicatorMap, LOCK_CAPS, LOCK_NUM, ProfileStatus,
        RemoteBattery, Rgb, StatusOverlay, StatusSource, WiredState, blend_weight,
    };

    // Indicator palette at maximum brightness 100.
    const CRITICAL: Rgb = Rgb { r: 100, g: 0, b: 0 };
    const WARN: Rgb = Rgb {
        r: 100,
        g: 100,
        b: 0,
    };
    const ACCENT_COOL: Rgb = Rgb {
        r: 0,
        g: 74,
        b: 100,
    };
    const ACCENT_SECONDARY: Rgb = Rgb {
        r: 41,
        g: 12,
        b: 80,
    };
    const NEUTRAL: Rgb = Rgb {
        r: 100,
        g: 100,
        b: 100,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    struct FakeStatus {
        charge: u8,
        remote: RemoteBattery,
        profiles: [ProfileStatus; 4],
        active_profile: usize,
        wired: WiredState,
        transport: ActiveTransport,
        preferred_active: bool,
        locks: u8,
        active_layers: u8,
    }

    impl Default for FakeStatus {
        fn default() -> Self {
            Self {
                charge: 100,
                remote: RemoteBattery::Unavailable,
                profiles: [ProfileStatus::Unused; 4],
                active_profile: 0,
                wired: WiredState::None,
                transport: ActiveTransport::Wireless,
                preferred_active: true,
                locks: 0,
                active_layers: 0,
            }
        }
    }

    impl StatusSource for FakeStatus {
        fn battery_charge_percent(&self) -> u8 {
            self.charge
        }

        fn remote_battery_charge_percent(&self, _index: u8) -> RemoteBattery {
            self.remote
        }

        fn profile_count(&self) -> usize {
            self.profiles.len()
        }

        fn profile_status(&self, index: usize) -> ProfileStatus {
            self.profiles[index]
        }

        fn active_profile(&self) -> usize {
            self.active_profile
        }

        fn wired_state(&self) -> WiredState {
            self.wired
        }

        fn active_transport(&self) -> ActiveTransport {
            self.transport
        }

        fn preferred_transport_is_active(&self) -> bool {
            self.preferred_active
        }

        fn lock_indicator_bits(&self) -> u8 {
            self.locks
        }

        fn layer_active(&self, index: usize) -> bool {
            self.active_layers & (1 << index) != 0
        }
    }

    fn generate(source: &FakeStatus, map: &IndicatorMap<'_>, step: u16) -> ([Rgb; 16], u16) {
        let overlay = StatusOverlay::new(100);
        let mut pixels = [Rgb { r: 9, g: 9, b: 9 }; 16];
        let weight = overlay.generate(&mut pixels, source, map, step);
        (pixels, weight)
    }

    #[test]
    fn test_blend_envelope() {
        assert_eq!(blend_weight(0), 0);
        assert_eq!(blend_weight(10), 128);
        assert_eq!(blend_weight(20), FULL_WEIGHT);
        assert_eq!(blend_weight(320), FULL_WEIGHT);
        assert_eq!(blend_weight(360), 128);
        assert_eq!(blend_weight(400), 0);
        assert_eq!(blend_weight(1000), 0);
    }

    #[test]
    fn test_battery_buckets() {
        let map = IndicatorMap {
            battery_local: &[0, 1, 2, 3, 4, 5],
            ..IndicatorMap::default()
        };

        let source = FakeStatus {
            charge: 70,
            ..FakeStatus::default()
        };
        let (pixels, _) = generate(&source, &map, 100);
        // thresholds 0/20/40/60/80/100
        let expected = [
            ACCENT_COOL,
            ACCENT_COOL,
            ACCENT_COOL,
            ACCENT_COOL,
            BLACK,
            BLACK,
        ];
        assert_eq!(&pixels[..6], &expected);
    }

    #[test]
    fn test_battery_tier_colors() {
        let map = IndicatorMap {
            battery_local: &[0, 1],
            ..IndicatorMap::default()
        };

        let warm = FakeStatus {
            charge: 30,
            ..FakeStatus::default()
        };
        let (pixels, _) = generate(&warm, &map, 100);
        assert_eq!(pixels[0], WARN);

        let critical = FakeStatus {
            charge: 10,
            ..FakeStatus::default()
        };
        let (pixels, _) = generate(&critical, &map, 100);
        assert_eq!(pixels[0], CRITICAL);
        assert_eq!(pixels[1], BLACK);
    }

    #[test]
    fn test_remote_battery_not_connected_fills_critical() {
        let map = IndicatorMap {
            battery_remote: &[4, 5, 6],
            ..IndicatorMap::default()
        };
        let source = FakeStatus {
            remote: RemoteBattery::NotConnected,
            ..FakeStatus::default()
        };

        let (pixels, _) = generate(&source, &map, 100);
        assert_eq!(&pixels[4..=6], &[CRITICAL; 3]);
    }

    #[test]
    fn test_lock_indicators() {
        let map = IndicatorMap {
            numlock: Some(1),
            capslock: Some(2),
            scrolllock: Some(3),
            ..IndicatorMap::default()
        };
        let source = FakeStatus {
            locks: LOCK_NUM | LOCK_CAPS,
            ..FakeStatus::default()
        };

        let (pixels, _) = generate(&source, &map, 100);
        assert_eq!(pixels[1], WARN);
        assert_eq!(pixels[2], WARN);
        assert_eq!(pixels[3], BLACK);
    }

    #[test]
    fn test_layer_indicators() {
        let map = IndicatorMap {
            layers: &[10, 11, 12],
            ..IndicatorMap::default()
        };
        let source = FakeStatus {
            active_layers: 0b101,
            ..FakeStatus::default()
        };

        let (pixels, _) = generate(&source, &map, 100);
        assert_eq!(pixels[10], ACCENT_SECONDARY);
        assert_eq!(pixels[11], BLACK);
        assert_eq!(pixels[12], ACCENT_SECONDARY);
    }

    #[test]
    fn test_profile_states() {
        let map = IndicatorMap {
            profiles: &[8, 9, 10, 11],
            ..IndicatorMap::default()
        };
        let source = FakeStatus {
            profiles: [
                ProfileStatus::Connected,
                ProfileStatus::Connected,
                ProfileStatus::Paired,
                ProfileStatus::Unused,
            ],
            active_profile: 0,
            transport: ActiveTransport::Wireless,
            ..FakeStatus::default()
        };

        let (pixels, _) = generate(&source, &map, 100);
        assert_eq!(pixels[8], NEUTRAL);
        assert_eq!(pixels[9], ACCENT_COOL);
        assert_eq!(pixels[10], CRITICAL);
        assert_eq!(pixels[11], ACCENT_SECONDARY);
    }

    #[test]
    fn test_wired_states() {
        let map = IndicatorMap {
            wired: Some(7),
            ..IndicatorMap::default()
        };

        let cases = [
            (WiredState::Active, ActiveTransport::Wired, NEUTRAL),
            (WiredState::Active, ActiveTransport::Wireless, ACCENT_COOL),
            (WiredState::Powered, ActiveTransport::Wireless, CRITICAL),
            (WiredState::None, ActiveTransport::Wireless, ACCENT_SECONDARY),
        ];
        for (wired, transport, expected) in cases {
            let source = FakeStatus {
                wired,
                transport,
                ..FakeStatus::default()
            };
            let (pixels, _) = generate(&source, &map, 100);
            assert_eq!(pixels[7], expected);
        }
    }

    #[test]
    fn test_output_fallback() {
        let map = IndicatorMap {
            output_fallback: Some(15),
            ..IndicatorMap::default()
        };
        let source = FakeStatus {
            preferred_active: false,
            ..FakeStatus::default()
        };

        let (pixels, _) = generate(&source, &map, 100);
        assert_eq!(pixels[15], CRITICAL);
    }

    #[test]
    fn test_overlay_clears_stale_pixels() {
        let map = IndicatorMap::default();
        let source = FakeStatus::default();

        let (pixels, weight) = generate(&source, &map, 100);
        assert!(pixels.iter().all(|&px| px == BLACK));
        assert_eq!(weight, FULL_WEIGHT);
    }
}
