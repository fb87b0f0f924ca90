use treecol::core::config::{Config, IconStyle};

#[test]
fn test_default_config_is_usable() {
    let config = Config::default();
    assert!(config.indent_width >= 1);
    assert!(config.max_cell_width > config.indent_width);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{"icon_style": "plain", "some_future_field": 42}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.icon_style, IconStyle::Plain);
    assert_eq!(config.max_cell_width, Config::default().max_cell_width);
}

#[test]
fn test_corrupt_json_falls_back_to_defaults() {
    // Config::load uses unwrap_or_default on parse failures; mirror that here
    let parsed: Config = serde_json::from_str("{not json").unwrap_or_default();
    assert_eq!(parsed.indent_width, Config::default().indent_width);
}

#[test]
fn test_icon_style_serializes_lowercase() {
    let json = serde_json::to_string(&IconStyle::Unicode).unwrap();
    assert_eq!(json, r#""unicode""#);
}
