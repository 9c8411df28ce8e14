mod common;

mod tests {
    use embassy_time::Duration;
    use streetcar_light::color::{BLUE, GREEN, RED, WHITE};
    use streetcar_light::{Crossfade, FadeConfig, Rgb};

    use crate::common::{BLACK, BrokenSink, FakeClock, RecordingSink};

    const DELAY: Duration = Duration::from_micros(13_500);

    fn crossfade(steps: u16) -> Crossfade {
        Crossfade::new(&FadeConfig {
            steps,
            step_delay: DELAY,
        })
    }

    #[test]
    fn test_fade_endpoints_are_exact() {
        let pairs: [([Rgb; 4], [Rgb; 4]); 3] = [
            ([BLACK; 4], [RED, GREEN, BLUE, WHITE]),
            ([RED, GREEN, BLUE, WHITE], [BLACK; 4]),
            ([RED; 4], [Rgb::new(1, 254, 77); 4]),
        ];
        for (source, destination) in pairs {
            let mut sink = RecordingSink::<4>::new();
            let mut clock = FakeClock::new();
            let last = crossfade(8)
                .run(&source, &destination, &mut sink, &mut clock)
                .unwrap();

            assert_eq!(sink.flushed.len(), 9);
            assert_eq!(sink.flushed[0], source);
            assert_eq!(sink.flushed[8], destination);
            assert_eq!(last, destination);
        }
    }

    #[test]
    fn test_fade_is_monotonic() {
        let mut sink = RecordingSink::<1>::new();
        let mut clock = FakeClock::new();
        crossfade(8)
            .run(&[BLACK], &[WHITE], &mut sink, &mut clock)
            .unwrap();

        let reds: Vec<u8> = sink.flushed.iter().map(|frame| frame[0].r).collect();
        assert!(reds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_fade_pauses_after_each_frame() {
        let mut sink = RecordingSink::<2>::new();
        let mut clock = FakeClock::new();
        crossfade(8)
            .run(&[BLACK; 2], &[WHITE; 2], &mut sink, &mut clock)
            .unwrap();
        assert_eq!(clock.sleeps, vec![DELAY; 9]);
    }

    #[test]
    fn test_zero_steps_cuts_to_destination() {
        let mut sink = RecordingSink::<3>::new();
        let mut clock = FakeClock::new();
        let last = crossfade(0)
            .run(&[WHITE; 3], &[RED; 3], &mut sink, &mut clock)
            .unwrap();
        assert_eq!(sink.flushed, vec![[RED; 3]]);
        assert_eq!(last, [RED; 3]);
        assert!(clock.sleeps.is_empty());
    }

    #[test]
    fn test_flush_error_stops_fade() {
        let mut clock = FakeClock::new();
        let result = crossfade(8).run(&[BLACK; 2], &[WHITE; 2], &mut BrokenSink, &mut clock);
        assert_eq!(result, Err("bus error"));
        assert!(clock.sleeps.is_empty());
    }
}
