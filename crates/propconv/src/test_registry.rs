#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use serde_json::{Value, json};
    use time::UtcOffset;
    use url::Url;

    use crate::{
        Color, Font, PropType, Registry, Transform3D,
        catalog::{ContentMode, FontWeight},
        diagnostics::{RecordingLog, with_sink},
    };

    #[test]
    fn every_registered_type_converts_null_to_its_fallback_silently() {
        let log = Arc::new(RecordingLog::new());
        let registry = Registry::builtin();
        with_sink(log.clone(), || {
            for name in registry.type_names() {
                let conv = registry.get(name).unwrap();
                let scalar = (conv.scalar)(&Value::Null);
                assert_eq!(scalar.to_json(), (conv.fallback)().to_json(), "{name}");
                let array = (conv.array)(&Value::Null);
                assert_eq!(array.to_json(), json!([]), "{name}");
            }
        });
        assert!(log.is_empty(), "{:?}", log.entries());
    }

    #[test]
    fn dispatch_produces_the_registered_native_type() {
        let r = Registry::builtin();
        let get = |name: &'static str, json: Value| r.convert(PropType::Scalar(name), &json).unwrap();

        assert_eq!(get("Color", json!("#fff")).downcast::<Color>().ok(), Some(Color::WHITE));
        assert_eq!(
            get("ContentMode", json!("contain")).downcast::<ContentMode>().ok(),
            Some(ContentMode::ScaleAspectFit)
        );
        assert_eq!(
            get("TimeInterval", json!(1500)).downcast::<Duration>().ok(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(
            get("TimeZone", json!(-300)).downcast::<Option<UtcOffset>>().ok(),
            Some(UtcOffset::from_whole_seconds(-300 * 60).ok())
        );
        assert_eq!(
            get("Url", json!("https://example.com/a")).downcast::<Option<Url>>().ok(),
            Some(Url::parse("https://example.com/a").ok())
        );
        assert_eq!(
            get("Transform3D", Value::Null).downcast::<Transform3D>().ok(),
            Some(Transform3D::IDENTITY)
        );

        let font = get("Font", json!({"weight": "bold"})).downcast::<Font>().unwrap();
        assert_eq!(font.weight, FontWeight::Bold);
    }

    #[test]
    fn type_names_are_exact() {
        let r = Registry::builtin();
        assert!(r.convert(PropType::Scalar("color"), &json!("red")).is_none());
        assert!(r.convert(PropType::Array("Point"), &json!([[1, 2]])).is_some());
    }

    #[test]
    fn converted_values_render_as_json() {
        let r = Registry::builtin();
        let v = r.convert(PropType::Array("i32"), &json!(["1", 2.9, -3])).unwrap();
        assert_eq!(v.to_json(), json!([1, 2, -3]));
    }
}
