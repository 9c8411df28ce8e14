mod tests {
    use streetcar_light::color::{Rgb, lerp, scale, wheel};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(RED, BLUE, 0), RED);
        assert_eq!(lerp(RED, BLUE, 255), BLUE);
        assert_eq!(
            lerp(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(
            lerp(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(lerp(WHITE, BLACK, 255), BLACK);
        assert_eq!(lerp(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(WHITE, 255), WHITE);
        assert_eq!(scale(WHITE, 0), BLACK);
        assert_eq!(
            scale(Rgb::new(255, 255, 100), 128),
            Rgb {
                r: 128,
                g: 128,
                b: 50
            }
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(wheel(0), Rgb::new(0, 255, 0));
        assert_eq!(wheel(85), Rgb::new(255, 0, 0));
        assert_eq!(wheel(170), Rgb::new(0, 0, 255));
        assert_eq!(wheel(255), Rgb::new(0, 255, 0));
    }
}
