mod tests {
    use strip_fade_control::ramp::{Direction, clamp_percent, step_toward};

    #[test]
    fn test_step_toward_increase() {
        assert_eq!(step_toward(0, 100, 4, Direction::Increase), 4);
        assert_eq!(step_toward(96, 100, 4, Direction::Increase), 100);
        assert_eq!(step_toward(98, 100, 4, Direction::Increase), 100);
        assert_eq!(step_toward(100, 100, 4, Direction::Increase), 100);
    }

    #[test]
    fn test_step_toward_decrease() {
        assert_eq!(step_toward(100, 0, 4, Direction::Decrease), 96);
        assert_eq!(step_toward(4, 0, 4, Direction::Decrease), 0);
        assert_eq!(step_toward(3, 0, 4, Direction::Decrease), 0);
        assert_eq!(step_toward(0, 0, 4, Direction::Decrease), 0);
    }

    #[test]
    fn test_step_toward_never_overshoots() {
        let mut value = 0u8;
        let mut previous = value;
        while value != 255 {
            value = step_toward(value, 255, 6, Direction::Increase);
            assert!(value > previous);
            assert!(value <= 255);
            previous = value;
        }
    }

    #[test]
    fn test_step_toward_converges_in_bounded_calls() {
        // ceil(255 / 4) = 64
        let mut value = 0u8;
        let mut calls = 0;
        while value != 255 {
            value = step_toward(value, 255, 4, Direction::Increase);
            calls += 1;
        }
        assert_eq!(calls, 64);

        // ceil(99 / 4) = 25
        let mut value = 99u8;
        let mut calls = 0;
        while value != 0 {
            value = step_toward(value, 0, 4, Direction::Decrease);
            calls += 1;
        }
        assert_eq!(calls, 25);
    }

    #[test]
    fn test_step_toward_snaps_on_wrong_side() {
        // A stale direction must not push the value away from the target.
        assert_eq!(step_toward(0, 241, 4, Direction::Decrease), 241);
        assert_eq!(step_toward(241, 15, 4, Direction::Increase), 15);
    }

    #[test]
    fn test_step_toward_representation_bounds() {
        assert_eq!(step_toward(255, 255, 8, Direction::Increase), 255);
        assert_eq!(step_toward(0, 0, 8, Direction::Decrease), 0);
        assert_eq!(step_toward(250, 255, 8, Direction::Increase), 255);
        assert_eq!(step_toward(5, 0, 8, Direction::Decrease), 0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(50.0), 50.0);
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(105.0), 100.0);
        assert_eq!(clamp_percent(100.0), 100.0);
    }
}
