mod tests {
    use keyglow_engine::{BrightnessRange, Hsb, Rgb, hsb_to_rgb};

    #[test]
    fn test_primary_colors() {
        assert_eq!(hsb_to_rgb(Hsb::new(0, 100, 100)), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(
            hsb_to_rgb(Hsb::new(120, 100, 100)),
            Rgb { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            hsb_to_rgb(Hsb::new(240, 100, 100)),
            Rgb { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(
            hsb_to_rgb(Hsb::new(0, 0, 100)),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(hsb_to_rgb(Hsb::new(200, 100, 0)), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_scale_min_max() {
        let range = BrightnessRange::new(20, 80).unwrap();
        assert_eq!(range.scale_min_max(Hsb::new(0, 0, 0)).b, 20);
        assert_eq!(range.scale_min_max(Hsb::new(0, 0, 100)).b, 80);
        assert_eq!(range.scale_min_max(Hsb::new(0, 0, 50)).b, 50);
    }

    #[test]
    fn test_scale_zero_max() {
        let range = BrightnessRange::new(20, 80).unwrap();
        assert_eq!(range.scale_zero_max(Hsb::new(0, 0, 0)).b, 0);
        assert_eq!(range.scale_zero_max(Hsb::new(0, 0, 100)).b, 80);
        assert_eq!(range.scale_zero_max(Hsb::new(0, 0, 50)).b, 40);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(BrightnessRange::new(80, 20).is_err());
        assert!(BrightnessRange::new(0, 120).is_err());
        assert!(BrightnessRange::new(50, 50).is_ok());
    }

    #[test]
    fn test_hsb_in_range() {
        assert!(Hsb::new(359, 100, 100).in_range());
        assert!(!Hsb::new(360, 100, 100).in_range());
        assert!(!Hsb::new(0, 101, 0).in_range());
        assert!(!Hsb::new(0, 0, 101).in_range());
    }
}
