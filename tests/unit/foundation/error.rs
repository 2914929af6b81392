use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixmotionError::parse("x")
            .to_string()
            .contains("parse error:")
    );
    assert!(
        PixmotionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixmotionError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        PixmotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixmotionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: PixmotionError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, PixmotionError::Serde(_)));
}
