/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the variable is missing or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.trim().parse::<T>().ok())
}

/// Reads a boolean flag, accepting `1/0`, `true/false`, `yes/no` and `on/off`
///
/// Any other value (or a missing variable) yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => parse_flag(&val).unwrap_or_else(|| {
            warn!("Unrecognised flag {}={:?}, using {}", env_var, val, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
