use docsight::presentation::Environment;
use docsight::presentation::config::UnknownEnvironment;

#[test]
fn given_known_names_when_parsing_environment_then_ignores_case() {
    assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!(" test ".parse::<Environment>(), Ok(Environment::Test));
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = "staging".parse::<Environment>();

    assert_eq!(result, Err(UnknownEnvironment("staging".to_string())));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_capitalized_suffix() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.Prod");
    assert_eq!(Environment::default().to_string(), "Local");
}
