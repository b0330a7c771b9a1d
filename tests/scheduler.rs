mod common;

mod tests {
    use myrtio_arc_light::{
        ArcLight, Duration, Error, InputSource, Instant, Line, LineSample, PinTable,
        PollScheduler, PushChannel, RotationEvent, StatePush,
    };

    use crate::common::{RecordingRenderer, ScriptedInputs, default_config, right_detent};

    struct FailingInputs;

    impl InputSource for FailingInputs {
        fn sample(&mut self) -> Result<LineSample, Error> {
            Err(Error::InputRead(Line::B))
        }
    }

    fn light(table: &mut PinTable<8>) -> ArcLight<RecordingRenderer> {
        ArcLight::new(default_config(), 30, table, RecordingRenderer::default()).unwrap()
    }

    #[test]
    fn test_polls_every_interval() {
        let mut table = PinTable::<8>::new();
        let mut scheduler: PollScheduler<'_, _, _, 4> =
            PollScheduler::new(light(&mut table), ScriptedInputs::new(right_detent().to_vec()));

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert!(result.events.is_some());
        assert_eq!(result.next_deadline, Instant::from_millis(2));
        assert_eq!(result.sleep_duration, Duration::from_millis(2));

        let result = scheduler.tick(Instant::from_millis(1)).unwrap();
        assert!(result.events.is_none());
        assert_eq!(result.sleep_duration, Duration::from_millis(1));

        let result = scheduler.tick(Instant::from_millis(2)).unwrap();
        let events = result.events.unwrap();
        assert_eq!(events.rotation, Some(RotationEvent::RotateRight));
        assert_eq!(scheduler.light().photometric().brightness, 128);
    }

    #[test]
    fn test_drift_resets_deadline() {
        let mut table = PinTable::<8>::new();
        let mut scheduler: PollScheduler<'_, _, _, 4> =
            PollScheduler::new(light(&mut table), ScriptedInputs::default());

        scheduler.tick(Instant::from_millis(0)).unwrap();
        let result = scheduler.tick(Instant::from_millis(100)).unwrap();
        assert!(result.events.is_some());
        assert_eq!(result.next_deadline, Instant::from_millis(102));

        // Slightly late polls keep the 2 ms cadence
        let result = scheduler.tick(Instant::from_millis(103)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(104));
        assert_eq!(result.sleep_duration, Duration::from_millis(1));
    }

    #[test]
    fn test_custom_interval() {
        let mut table = PinTable::<8>::new();
        let mut scheduler: PollScheduler<'_, _, _, 4> = PollScheduler::with_interval(
            light(&mut table),
            ScriptedInputs::default(),
            Duration::from_millis(10),
        );
        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(10));
    }

    #[test]
    fn test_pushes_are_applied_before_poll() {
        let channel = PushChannel::<4>::new();
        let mut table = PinTable::<8>::new();
        let mut scheduler = PollScheduler::new(light(&mut table), ScriptedInputs::default())
            .with_pushes(channel.receiver());

        channel
            .sender()
            .try_send(StatePush {
                brightness: Some(42),
                ..StatePush::default()
            })
            .unwrap();
        scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(scheduler.light().photometric().brightness, 42);
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn test_input_errors_propagate() {
        let mut table = PinTable::<8>::new();
        let mut scheduler: PollScheduler<'_, _, _, 4> =
            PollScheduler::new(light(&mut table), FailingInputs);
        assert_eq!(
            scheduler.tick(Instant::from_millis(0)).unwrap_err(),
            Error::InputRead(Line::B)
        );
    }

    #[test]
    fn test_into_parts() {
        let mut table = PinTable::<8>::new();
        let scheduler: PollScheduler<'_, _, _, 4> =
            PollScheduler::new(light(&mut table), ScriptedInputs::default());
        let (light, _inputs) = scheduler.into_parts();
        light.shutdown(&mut table);
        assert_eq!(table.owner(13), None);
    }
}
