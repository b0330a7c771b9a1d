mod common;

mod tests {
    use myrtio_arc_light::{
        ARC_SEGMENT_INDEX, ArcLight, ConfigPatch, Error, Mode, PhotometricUpdate, PinOwner,
        PinTable, RotationEvent, StatePush, kelvin_to_rgb,
    };

    use crate::common::{RecordingRenderer, default_config, left_detent, press, right_detent};

    fn start(table: &mut PinTable<8>) -> ArcLight<RecordingRenderer> {
        ArcLight::new(default_config(), 30, table, RecordingRenderer::default()).unwrap()
    }

    #[test]
    fn test_start_emits_initial_state() {
        let mut table = PinTable::<8>::new();
        let light = start(&mut table);

        assert_eq!(light.renderer().segments, [(ARC_SEGMENT_INDEX, 0, 30)]);
        assert_eq!(
            light.renderer().photometric,
            [PhotometricUpdate {
                brightness: 127,
                color_temperature: 1800,
                color: kelvin_to_rgb(1800),
            }]
        );
        assert_eq!(light.mode(), Mode::Brightness);
        assert_eq!(table.owner(13), Some(PinOwner::ArcLight));
    }

    #[test]
    fn test_start_fails_without_pins() {
        let mut table = PinTable::<8>::new();
        table.allocate(14, PinOwner::Other(7)).unwrap();

        let result = ArcLight::new(default_config(), 30, &mut table, RecordingRenderer::default());
        assert!(matches!(result, Err(Error::ResourceUnavailable { pin: 14 })));
        assert_eq!(table.owner(13), None);
        assert_eq!(table.owner(4), None);
    }

    #[test]
    fn test_rotation_adjusts_brightness() {
        let mut table = PinTable::<8>::new();
        let mut light = start(&mut table);

        let events: Vec<_> = right_detent().into_iter().map(|s| light.poll(s)).collect();
        assert_eq!(events[0].rotation, None);
        assert_eq!(events[1].rotation, Some(RotationEvent::RotateRight));
        assert_eq!(light.photometric().brightness, 128);
        assert_eq!(light.renderer().photometric.len(), 2);
        assert_eq!(light.renderer().photometric[1].brightness, 128);
    }

    #[test]
    fn test_button_switches_what_rotation_adjusts() {
        let mut table = PinTable::<8>::new();
        let mut light = start(&mut table);

        let modes: Vec<_> = press()
            .into_iter()
            .filter_map(|s| light.poll(s).mode)
            .collect();
        assert_eq!(modes, [Mode::ArcLength]);

        for sample in left_detent() {
            light.poll(sample);
        }
        assert_eq!(light.arc().half_arc_length, 15);
        assert_eq!(light.photometric().brightness, 127);
        assert_eq!(light.renderer().segments.len(), 2);

        for sample in press().into_iter().chain(left_detent()) {
            light.poll(sample);
        }
        assert_eq!(light.mode(), Mode::Position);
        assert_eq!(light.arc().center, 14);
        assert_eq!(light.segment().start, 0);
        assert_eq!(light.segment().end, 29);
    }

    #[test]
    fn test_clamped_rotation_emits_nothing() {
        let mut table = PinTable::<8>::new();
        let mut light = start(&mut table);
        for sample in press() {
            light.poll(sample);
        }

        let events: Vec<_> = right_detent().into_iter().map(|s| light.poll(s)).collect();
        assert_eq!(events[1].rotation, Some(RotationEvent::RotateRight));
        assert_eq!(events[1].update, None);
        assert_eq!(light.renderer().segments.len(), 1);
    }

    #[test]
    fn test_push_is_clamped_and_emitted_once() {
        let mut table = PinTable::<8>::new();
        let mut light = start(&mut table);

        let push = StatePush {
            brightness: Some(300),
            color_temperature: Some(5000),
            ..StatePush::default()
        };
        assert!(light.apply_push(&push));
        assert_eq!(light.photometric().brightness, 250);
        assert_eq!(light.photometric().color_temperature, 4000);
        assert_eq!(light.renderer().photometric.len(), 2);
        assert_eq!(light.renderer().photometric[1].color, kelvin_to_rgb(4000));
        assert!(light.renderer().segments.len() == 1);

        assert!(!light.apply_push(&push));
        assert!(!light.apply_push(&StatePush::default()));
    }

    #[test]
    fn test_push_restores_arc() {
        let mut table = PinTable::<8>::new();
        let mut light = start(&mut table);

        let push = StatePush {
            center: Some(10),
            half_arc_length: Some(4),
            ..StatePush::default()
        };
        assert!(light.apply_push(&push));
        assert_eq!(light.renderer().segments.last(), Some(&(ARC_SEGMENT_INDEX, 6, 14)));
        assert_eq!(light.renderer().photometric.len(), 1);
    }

    #[test]
    fn test_update_config_applies_bounds_and_step() {
        let mut table = PinTable::<8>::new();
        let mut light = start(&mut table);

        let patch = ConfigPatch {
            color_temp_lower_bound: Some(2000),
            color_temperature_step: Some(500),
            ..ConfigPatch::default()
        };
        assert!(light.update_config(&patch));
        assert_eq!(light.photometric().color_temperature, 2000);
        assert_eq!(light.config().color_temp_lower_bound, 2000);

        for sample in press()
            .into_iter()
            .chain(press())
            .chain(press())
            .chain(right_detent())
        {
            light.poll(sample);
        }
        assert_eq!(light.mode(), Mode::ColorTemperature);
        assert_eq!(light.photometric().color_temperature, 2500);

        assert!(!light.update_config(&patch));
    }

    #[test]
    fn test_shutdown_releases_pins() {
        let mut table = PinTable::<8>::new();
        let light = start(&mut table);

        let renderer = light.shutdown(&mut table);
        assert_eq!(renderer.segments.len(), 1);
        assert_eq!(table.owner(13), None);
        assert_eq!(table.owner(14), None);
        assert_eq!(table.owner(4), None);

        // Pins can be taken again
        assert!(ArcLight::new(default_config(), 30, &mut table, renderer).is_ok());
    }
}
