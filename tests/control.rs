mod tests {
    use embassy_time::Instant;
    use strip_fade_control::{
        ButtonConfig, ColorMode, ControlConfig, DigitalInput, Level, PixelBus, Rgb, RotaryChannel,
        RotaryEvent, StepSizes, StripControl,
    };

    const N: usize = 10;
    const EVENTS: usize = 8;

    struct FakePin {
        level: Level,
    }

    impl DigitalInput for FakePin {
        fn read_level(&mut self) -> Level {
            self.level
        }
    }

    #[derive(Default)]
    struct NullBus;

    impl PixelBus for NullBus {
        fn set_pixel(&mut self, _index: u16, _color: Rgb) {}
        fn show(&mut self) {}
        fn clear(&mut self) {}
    }

    fn new_control(channel: &RotaryChannel<EVENTS>) -> StripControl<'_, N, EVENTS> {
        let mut control = StripControl::new(
            channel.receiver(),
            ButtonConfig::default(),
            StepSizes::default(),
            ControlConfig::default(),
        );
        control.setup(0, false);
        control
    }

    fn press(control: &mut StripControl<'_, N, EVENTS>, pin: &mut FakePin, millis: u64) {
        pin.level = Level::Low;
        control.poll(pin, Instant::from_millis(millis));
    }

    fn release(control: &mut StripControl<'_, N, EVENTS>, pin: &mut FakePin, millis: u64) {
        pin.level = Level::High;
        control.poll(pin, Instant::from_millis(millis));
    }

    #[test]
    fn test_rotation_adjusts_lit_length() {
        let channel = RotaryChannel::<EVENTS>::new();
        let sender = channel.sender();
        let mut control = new_control(&channel);
        let mut pin = FakePin { level: Level::High };

        sender.send(RotaryEvent::StepRight).unwrap();
        sender.send(RotaryEvent::StepRight).unwrap();
        control.poll(&mut pin, Instant::from_millis(100));
        assert_eq!(control.strip().lit_percent(), 60.0);

        sender.send(RotaryEvent::StepLeft).unwrap();
        control.poll(&mut pin, Instant::from_millis(200));
        assert_eq!(control.strip().lit_percent(), 55.0);
    }

    #[test]
    fn test_click_toggles_power() {
        let channel = RotaryChannel::<EVENTS>::new();
        let mut control = new_control(&channel);
        let mut pin = FakePin { level: Level::High };
        assert!(control.strip().is_on());

        press(&mut control, &mut pin, 100);
        release(&mut control, &mut pin, 150);
        assert!(!control.strip().is_on());

        press(&mut control, &mut pin, 300);
        release(&mut control, &mut pin, 350);
        assert!(control.strip().is_on());
    }

    #[test]
    fn test_hold_enters_color_adjust() {
        let channel = RotaryChannel::<EVENTS>::new();
        let sender = channel.sender();
        let mut control = new_control(&channel);
        let mut pin = FakePin { level: Level::High };

        press(&mut control, &mut pin, 100);
        press(&mut control, &mut pin, 400);
        assert!(control.is_color_adjusting());
        release(&mut control, &mut pin, 450);
        // The hold consumed the press cycle, so no click toggled the power
        assert!(control.strip().is_on());

        // Rotation now changes the color temperature, not the lit length
        sender.send(RotaryEvent::StepRight).unwrap();
        control.poll(&mut pin, Instant::from_millis(500));
        assert_eq!(control.strip().lit_percent(), 50.0);

        let mut bus = NullBus;
        for _ in 0..10 {
            control.tick(&mut bus, false);
        }
        // 99 + 15 requested by the rotation step
        assert_eq!(control.strip().color_temperature(), 114);
    }

    #[test]
    fn test_click_while_adjusting_toggles_color_mode() {
        let channel = RotaryChannel::<EVENTS>::new();
        let mut control = new_control(&channel);
        let mut pin = FakePin { level: Level::High };
        assert_eq!(control.strip().color_mode(), ColorMode::Cct);

        press(&mut control, &mut pin, 100);
        press(&mut control, &mut pin, 400);
        release(&mut control, &mut pin, 450);

        press(&mut control, &mut pin, 600);
        release(&mut control, &mut pin, 650);
        assert_eq!(control.strip().color_mode(), ColorMode::Rgb);
        assert!(control.strip().is_on());
    }

    #[test]
    fn test_color_adjust_times_out() {
        let channel = RotaryChannel::<EVENTS>::new();
        let mut control = new_control(&channel);
        let mut pin = FakePin { level: Level::High };

        press(&mut control, &mut pin, 100);
        press(&mut control, &mut pin, 400);
        release(&mut control, &mut pin, 450);
        assert!(control.is_color_adjusting());

        // Still inside the 3000ms idle window
        control.poll(&mut pin, Instant::from_millis(3000));
        assert!(control.is_color_adjusting());

        control.poll(&mut pin, Instant::from_millis(3500));
        assert!(!control.is_color_adjusting());
    }

    #[test]
    fn test_hold_again_leaves_color_adjust() {
        let channel = RotaryChannel::<EVENTS>::new();
        let mut control = new_control(&channel);
        let mut pin = FakePin { level: Level::High };

        press(&mut control, &mut pin, 100);
        press(&mut control, &mut pin, 400);
        assert!(control.is_color_adjusting());
        release(&mut control, &mut pin, 450);

        press(&mut control, &mut pin, 600);
        press(&mut control, &mut pin, 900);
        assert!(!control.is_color_adjusting());
        release(&mut control, &mut pin, 950);
    }
}
