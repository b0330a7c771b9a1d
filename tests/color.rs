mod tests {
    use myrtio_arc_light::color::{KELVIN_MIN, Rgb, kelvin_to_rgb};

    #[test]
    fn test_kelvin_to_rgb() {
        assert_eq!(kelvin_to_rgb(1000), Rgb::new(255, 67, 0));
        assert_eq!(kelvin_to_rgb(1800), Rgb::new(255, 126, 0));
        assert_eq!(kelvin_to_rgb(4000), Rgb::new(255, 205, 166));
        assert_eq!(kelvin_to_rgb(6600), Rgb::new(255, 255, 255));
        assert_eq!(kelvin_to_rgb(40000), Rgb::new(151, 185, 255));
    }

    #[test]
    fn test_kelvin_below_range_uses_minimum() {
        assert_eq!(kelvin_to_rgb(800), kelvin_to_rgb(KELVIN_MIN));
        assert_eq!(kelvin_to_rgb(0), kelvin_to_rgb(KELVIN_MIN));
    }

    #[test]
    fn test_kelvin_warmer_has_less_blue() {
        let warm = kelvin_to_rgb(2700);
        let cool = kelvin_to_rgb(4000);
        assert!(warm.b < cool.b);
        assert!(warm.g < cool.g);
    }
}
