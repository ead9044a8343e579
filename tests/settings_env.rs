// Kept apart from tests/settings.rs: the variables set here are process-wide
// and would leak into every load made by that file's tests.
use std::env;
use std::fs;

use knowrep::settings::Settings;

#[test]
fn environment_overrides_file_and_defaults() {
    let path = "knowrep_settings_env_test.toml";
    fs::write(path, "multi_value_threshold = 0.5\nmax_enumeration_variables = 8\nlog_filter = \"warn\"\n")
        .expect("writable cwd");
    // SAFETY: the only test in this binary, so no other thread reads the environment.
    unsafe {
        env::set_var("KNOWREP_MULTI_VALUE_THRESHOLD", "0.25");
        env::set_var("KNOWREP_MAX_ENUMERATION_VARIABLES", "6");
    }
    let from_file = Settings::load("knowrep_settings_env_test");
    let without_file = Settings::load("no_such_knowrep_env_settings");
    unsafe {
        env::remove_var("KNOWREP_MULTI_VALUE_THRESHOLD");
        env::remove_var("KNOWREP_MAX_ENUMERATION_VARIABLES");
    }
    let _ = fs::remove_file(path);

    let settings = from_file.expect("valid settings");
    assert_eq!(settings.multi_value_threshold, 0.25, "environment beats the file");
    assert_eq!(settings.max_enumeration_variables, 6);
    assert_eq!(settings.log_filter, "warn", "file still applies where the environment is silent");

    let settings = without_file.expect("valid settings");
    assert_eq!(settings.multi_value_threshold, 0.25, "environment beats the defaults");
    assert_eq!(settings.max_enumeration_variables, 6);
    assert_eq!(settings.log_filter, "info");
}
