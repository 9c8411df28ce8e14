mod tests {
    use embassy_time::{Duration, Instant};
    use streetcar_light::{ClickClassifier, ClickEvent};

    const WINDOW: Duration = Duration::from_millis(500);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Feed (time, released) samples and collect the non-empty events
    fn run(samples: &[(u64, bool)]) -> Vec<(u64, ClickEvent)> {
        let mut clicks = ClickClassifier::new(WINDOW);
        samples
            .iter()
            .map(|&(ms, released)| (ms, clicks.classify(released, at(ms))))
            .filter(|(_, event)| *event != ClickEvent::None)
            .collect()
    }

    #[test]
    fn test_press_sets_pending() {
        let mut clicks = ClickClassifier::new(WINDOW);
        assert_eq!(clicks.classify(true, at(0)), ClickEvent::None);
        assert_eq!(clicks.classify(false, at(10)), ClickEvent::None);
        assert_eq!(clicks.pending_since(), Some(at(10)));
    }

    #[test]
    fn test_holding_is_a_single_press() {
        let mut clicks = ClickClassifier::new(WINDOW);
        assert_eq!(clicks.classify(false, at(0)), ClickEvent::None);
        assert_eq!(clicks.classify(false, at(100)), ClickEvent::None);
        assert_eq!(clicks.classify(false, at(200)), ClickEvent::None);
        assert_eq!(clicks.pending_since(), Some(at(0)));
    }

    #[test]
    fn test_double_click() {
        let events = run(&[
            (0, false),
            (100, true),
            (200, false),
            (300, true),
            (800, true),
            (1200, true),
        ]);
        assert_eq!(events, [(200, ClickEvent::Double)]);
    }

    #[test]
    fn test_single_click_after_window() {
        let mut samples = vec![(0, false), (50, true)];
        samples.extend((1..=100).map(|i| (50 + i * 10, true)));
        let events = run(&samples);
        assert_eq!(events, [(500, ClickEvent::Single)]);
    }

    #[test]
    fn test_single_click_not_before_window() {
        let events = run(&[(0, false), (100, true), (499, true)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_second_press_at_window_boundary() {
        let mut clicks = ClickClassifier::new(WINDOW);
        assert_eq!(clicks.classify(false, at(0)), ClickEvent::None);
        assert_eq!(clicks.classify(true, at(100)), ClickEvent::None);
        assert_eq!(clicks.classify(false, at(500)), ClickEvent::Single);
        assert_eq!(clicks.pending_since(), Some(at(500)));
        assert_eq!(clicks.classify(true, at(600)), ClickEvent::None);
        assert_eq!(clicks.classify(true, at(1000)), ClickEvent::Single);
        assert_eq!(clicks.pending_since(), None);
    }

    #[test]
    fn test_second_press_just_inside_window() {
        let events = run(&[(0, false), (100, true), (499, false)]);
        assert_eq!(events, [(499, ClickEvent::Double)]);
    }

    #[test]
    fn test_third_press_starts_new_click() {
        let events = run(&[
            (0, false),
            (50, true),
            (100, false),
            (150, true),
            (200, false),
            (250, true),
            (700, true),
        ]);
        assert_eq!(events, [(100, ClickEvent::Double), (700, ClickEvent::Single)]);
    }
}
