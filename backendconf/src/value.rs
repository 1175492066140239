//! Conversion of raw environment strings into field types

use std::time::Duration;

/// Types a profile field can be bound to.
///
/// `Default` supplies the zero value used when a non-required field is unset
/// and declares no default.
pub trait FromEnvStr: Sized + Default {
    /// Converts the raw string, returning a human-readable reason on failure.
    fn from_env_str(raw: &str) -> Result<Self, String>;
}

impl FromEnvStr for String {
    fn from_env_str(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_from_env_str_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvStr for $ty {
                fn from_env_str(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_from_env_str_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromEnvStr for bool {
    fn from_env_str(raw: &str) -> Result<Self, String> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err("expected one of 1, t, true, 0, f, false".to_string()),
        }
    }
}

impl FromEnvStr for Duration {
    fn from_env_str(raw: &str) -> Result<Self, String> {
        if raw == "0" {
            return Ok(Duration::ZERO);
        }
        humantime::parse_duration(raw).map_err(|e| e.to_string())
    }
}
