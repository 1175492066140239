//! Environment sources consulted by the binding engine

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};

use crate::error::ConfError;

/// A source of environment variables.
///
/// Binding never reads `std::env` directly; it goes through a `Lookup` so
/// profiles can be bound against an in-memory snapshot in tests.
pub trait Lookup {
    /// Returns the value of `key`, or `None` if it is unset.
    ///
    /// # Errors
    ///
    /// A value that is set but cannot be read as a string.
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfError::conversion::<String>(
                key,
                raw.to_string_lossy(),
                "value is not valid UTF-8",
            )),
        }
    }
}

impl Lookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError> {
        Ok(self.get(key).cloned())
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError> {
        Ok(self.get(key).cloned())
    }
}

impl Lookup for [(&str, &str)] {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError> {
        Ok(self
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string()))
    }
}

impl<const N: usize> Lookup for [(&str, &str); N] {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError> {
        self.as_slice().lookup(key)
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfError> {
        (**self).lookup(key)
    }
}
