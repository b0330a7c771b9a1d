mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
    use myrtio_arc_light::{Error, GpioInputs, InputSource, Line, LineSample};

    struct Level(bool);

    impl ErrorType for Level {
        type Error = Infallible;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[derive(Debug)]
    struct Disconnected;

    impl embedded_hal::digital::Error for Disconnected {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct Broken;

    impl ErrorType for Broken {
        type Error = Disconnected;
    }

    impl InputPin for Broken {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(Disconnected)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(Disconnected)
        }
    }

    #[test]
    fn test_gpio_inputs_sample_levels() {
        let mut inputs = GpioInputs::new(Level(true), Level(false), Level(true));
        assert_eq!(
            inputs.sample(),
            Ok(LineSample {
                line_a: true,
                line_b: false,
                button: true,
            })
        );
    }

    #[test]
    fn test_gpio_inputs_report_failing_line() {
        let mut inputs = GpioInputs::new(Level(true), Level(true), Broken);
        assert_eq!(inputs.sample(), Err(Error::InputRead(Line::Button)));

        let mut inputs = GpioInputs::new(Level(true), Broken, Level(true));
        assert_eq!(inputs.sample(), Err(Error::InputRead(Line::B)));
    }
}
