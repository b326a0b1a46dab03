use docsight::infrastructure::observability::{DEFAULT_LOG_DIRECTIVES, TracingConfig};
use docsight::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_level_and_format_carry_over() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(&settings, "prod");

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.level, "warn");
}

#[test]
fn given_config_when_building_filter_then_base_level_precedes_crate_directives() {
    let config = TracingConfig::from_settings(&LoggingSettings::default(), "local");

    assert_eq!(
        config.filter_directives(),
        format!("info,{DEFAULT_LOG_DIRECTIVES}")
    );
}
