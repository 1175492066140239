//! The `Profile` trait implemented by `#[derive(Profile)]`

use anyhow::Context;

use crate::descriptor::FieldDescriptor;
use crate::error::ConfError;
use crate::lookup::{Lookup, ProcessEnv};

/// A fixed set of typed fields bound from environment variables.
///
/// Implemented by `#[derive(Profile)]`; hand-written impls are possible but
/// must keep `FIELDS` in the same order as the fields `bind` populates.
pub trait Profile: Sized {
    /// Struct name, used in error context and logs
    const NAME: &'static str;

    /// One descriptor per field, in declaration order
    const FIELDS: &'static [FieldDescriptor];

    /// Bind every field against `env`.
    ///
    /// # Errors
    ///
    /// - A required variable is unset
    /// - A value or default literal cannot be converted to its field type
    fn bind<L: Lookup + ?Sized>(env: &L) -> Result<Self, ConfError>;

    /// Bind against the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Profile::bind`], with the profile name attached as context.
    fn from_env() -> anyhow::Result<Self> {
        let profile = Self::bind(&ProcessEnv)
            .with_context(|| format!("failed to load {} from environment", Self::NAME))?;
        tracing::debug!(profile = Self::NAME, "configuration loaded");
        Ok(profile)
    }

    /// Environment variable names consulted by this profile.
    fn keys() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|desc| desc.key)
    }
}

/// Profiles that point at an additional configuration file.
pub trait ConfigPath {
    /// Path of the file, empty when none was configured
    fn config_path(&self) -> &str;
}
