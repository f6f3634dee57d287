use alpaca_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("ALPACA_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("ALPACA_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("ALPACA_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("ALPACA_MISSING_VAR");
        let result: String = get_env_or_default("ALPACA_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("ALPACA_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("ALPACA_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("ALPACA_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_trims_whitespace() {
    unsafe {
        env::set_var("ALPACA_TEST_VAR_PADDED", " 42 ");
        let result: u64 = get_env_or_default("ALPACA_TEST_VAR_PADDED", 0);
        assert_eq!(result, 42);
        env::remove_var("ALPACA_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("ALPACA_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("ALPACA_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("ALPACA_TEST_VAR_OPTION");

        let missing: Option<i32> = get_env_or_none("ALPACA_TEST_VAR_OPTION");
        assert_eq!(missing, None);
    }
}

#[test]
fn test_get_env_flag() {
    unsafe {
        env::set_var("ALPACA_TEST_FLAG", "yes");
        assert!(get_env_flag("ALPACA_TEST_FLAG", false));
        env::set_var("ALPACA_TEST_FLAG", "0");
        assert!(!get_env_flag("ALPACA_TEST_FLAG", true));
        env::set_var("ALPACA_TEST_FLAG", "sometimes");
        assert!(get_env_flag("ALPACA_TEST_FLAG", true));
        env::remove_var("ALPACA_TEST_FLAG");
        assert!(!get_env_flag("ALPACA_TEST_FLAG", false));
    }
}
