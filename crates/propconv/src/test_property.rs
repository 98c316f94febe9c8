#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use crate::{
        Color, EdgeInsets, PropType, PropertyError, Rect, Registry, View,
        catalog::{FlexDirection, PointerEvents},
        copy_property,
        diagnostics::{RecordingLog, with_sink},
        set_property, set_property_as, set_property_with, try_copy_property, try_set_property,
    };

    #[test]
    fn infers_type_from_descriptor() {
        let mut view = View::default();
        assert!(set_property(&mut view, "frame", &json!([0, 0, 100, 50])));
        assert!(set_property(&mut view, "pointerEvents", &json!("box-none")));
        assert!(set_property(&mut view, "hitSlop", &json!(10)));
        assert!(set_property(&mut view, "testID", &json!("submit")));

        assert_eq!(view.frame, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(view.pointer_events, PointerEvents::BoxNone);
        assert_eq!(view.hit_slop, EdgeInsets::uniform(10.0));
        assert_eq!(view.test_id, "submit");
    }

    #[test]
    fn dotted_paths_reach_children() {
        let mut view = View::default();
        assert!(set_property(&mut view, "style.flexDirection", &json!("row")));
        assert!(set_property(&mut view, "layer.backgroundColor", &json!("red")));
        assert!(set_property(&mut view, "layer.cornerRadius", &json!(4)));

        assert_eq!(view.style.flex_direction, FlexDirection::Row);
        assert_eq!(view.layer.background_color, Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(view.layer.corner_radius, 4.0);
    }

    #[test]
    fn numeric_string_equals_number() {
        let mut a = View::default();
        let mut b = View::default();
        assert!(set_property(&mut a, "style.width", &json!("12.5")));
        assert!(set_property(&mut b, "style.width", &json!(12.5)));
        assert_eq!(a.style.width, b.style.width);
        assert_eq!(a.style.width, 12.5);
    }

    #[test]
    fn array_properties_use_lifted_converter() {
        let mut view = View::default();
        assert!(set_property(&mut view, "gradientColors", &json!(["#000", "white"])));
        assert!(set_property(&mut view, "dashPattern", &json!([4, "2", 1.5])));

        assert_eq!(view.gradient_colors, vec![Color::BLACK, Color::WHITE]);
        assert_eq!(view.dash_pattern, vec![4.0, 2.0, 1.5]);

        // Null clears the sequence without a diagnostic.
        let log = Arc::new(RecordingLog::new());
        let ok = with_sink(log.clone(), || set_property(&mut view, "dashPattern", &Value::Null));
        assert!(ok);
        assert!(view.dash_pattern.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn unknown_and_read_only_leave_state_unchanged() {
        let log = Arc::new(RecordingLog::new());
        let mut view = View::with_tag(7);
        let before = serde_json::to_value(&view).unwrap();

        with_sink(log.clone(), || {
            assert!(!set_property(&mut view, "nonexistent", &json!(1)));
            assert!(!set_property(&mut view, "style.nonexistent", &json!(1)));
            assert!(!set_property(&mut view, "missing.width", &json!(1)));
            assert!(!set_property(&mut view, "frame.width", &json!(1)));
            assert!(!set_property(&mut view, "tag", &json!(99)));
        });

        assert_eq!(serde_json::to_value(&view).unwrap(), before);
        assert!(log.is_empty());
    }

    #[test]
    fn errors_name_the_reason() {
        let mut view = View::default();
        assert_eq!(
            try_set_property(&mut view, "tag", &json!(1)),
            Err(PropertyError::ReadOnly { path: "tag".into() })
        );
        assert_eq!(
            try_set_property(&mut view, "layer.nope", &json!(1)),
            Err(PropertyError::Unknown {
                path: "layer.nope".into()
            })
        );
    }

    #[test]
    fn invalid_value_assigns_fallback_and_logs() {
        let log = Arc::new(RecordingLog::new());
        let mut view = View::default();
        view.layer.background_color = Color::WHITE;

        let ok = with_sink(log.clone(), || {
            set_property(&mut view, "layer.backgroundColor", &json!("chartreuse-ish"))
        });
        assert!(ok);
        assert_eq!(view.layer.background_color, Color::TRANSPARENT);
        assert_eq!(log.type_names(), vec!["Color"]);
    }

    #[test]
    fn missing_converter_is_a_failure() {
        let mut view = View::default();
        let empty = Registry::new();
        assert!(!set_property_with(&empty, &mut view, "hidden", &json!(true)));
        assert!(!view.hidden);

        let mut only_bool = Registry::new();
        only_bool.register::<bool>();
        assert!(set_property_with(&only_bool, &mut view, "hidden", &json!(true)));
        assert!(view.hidden);
    }

    #[test]
    fn explicit_type_must_match_the_field() {
        let mut view = View::default();
        // The layer stores opacity as f32; an f64 value is refused untouched.
        assert!(!set_property_as(&mut view, "layer.opacity", PropType::Scalar("f64"), &json!(0.5)));
        assert_eq!(view.layer.opacity, 1.0);
        assert!(set_property_as(&mut view, "layer.opacity", PropType::Scalar("f32"), &json!(0.5)));
        assert_eq!(view.layer.opacity, 0.5);
    }

    #[test]
    fn copy_moves_values_between_targets() {
        let mut source = View::with_tag(3);
        source.style.width = 42.0;
        source.layer.shadow_color = Color::WHITE;
        let mut dest = View::default();

        assert!(copy_property(&mut dest.style, &source.style, "width"));
        assert_eq!(dest.style.width, 42.0);
        assert!(copy_property(&mut dest, &source, "layer.shadowColor"));
        assert_eq!(dest.layer.shadow_color, Color::WHITE);
    }

    #[test]
    fn copy_refuses_read_only_and_unknown() {
        let source = View::with_tag(3);
        let mut dest = View::with_tag(9);

        assert!(matches!(
            try_copy_property(&mut dest, &source, "tag"),
            Err(PropertyError::ReadOnly { .. })
        ));
        assert!(!copy_property(&mut dest, &source, "style.nope"));
        assert_eq!(dest.tag, 9);
    }

    #[test]
    fn copy_refuses_mismatched_types() {
        // "borderWidth" is EdgeInsets on a style and f64 on a layer.
        let source = View::default();
        let mut dest = View::default();
        dest.layer.border_width = 2.0;
        assert!(matches!(
            try_copy_property(&mut dest.layer, &source.style, "borderWidth"),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert_eq!(dest.layer.border_width, 2.0);
    }
}
