//! Typed environment-variable configuration for backend services
//!
//! `backendconf` binds plain structs to environment variables through a
//! declarative `#[derive(Profile)]`, and ships the profiles shared by the
//! backend services (core limits, Postgres, Redshift, ClickHouse,
//! Elasticsearch, HTTP server).
//!
//! # Field rules
//!
//! For every field, in declaration order:
//! 1. If the variable is set, its value is converted to the field type
//! 2. Otherwise a declared `default` literal is converted and used
//! 3. Otherwise a `required` field fails with [`ConfError::MissingRequiredValue`]
//! 4. Otherwise the field gets its zero value (`""`, `0`, `false`, zero duration)
//!
//! A set value that does not convert fails with [`ConfError::TypeConversion`];
//! it never silently falls back to the default.
//!
//! # Example
//!
//! ```rust
//! use backendconf::Profile;
//! use std::time::Duration;
//!
//! #[derive(Debug, Profile)]
//! struct Config {
//!     #[conf(name = "DATABASE_URL", required)]
//!     pub database_url: String,
//!
//!     #[conf(name = "WORKERS", default = "4")]
//!     pub workers: u32,
//!
//!     #[conf(name = "IDLE_TIMEOUT", default = "30s")]
//!     pub idle_timeout: Duration,
//!
//!     #[conf(name = "VERBOSE")]
//!     pub verbose: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = [("DATABASE_URL", "postgres://localhost/db"), ("WORKERS", "8")];
//! let config = Config::bind(&env)?;
//! assert_eq!(config.workers, 8);
//! assert_eq!(config.idle_timeout, Duration::from_secs(30));
//! assert!(!config.verbose);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[conf(name = "KEY")]`
//!
//! Environment variable to read. Defaults to the field name in upper case.
//!
//! ## `#[conf(default = "literal")]`
//!
//! String literal used when the variable is unset. It goes through the same
//! conversion as a real value, so `default = "60s"` works for a `Duration`.
//!
//! ## `#[conf(required)]`
//!
//! Fail binding when the variable is unset. Cannot be combined with `default`.
//!
//! ## `#[conf(prefix = "APP_")]` (struct level)
//!
//! Prepend a prefix to every variable name, including explicit `name`s.
//!
//! `Option<T>` fields bind to `None` when unset and accept neither `default`
//! nor `required`.

// Lets derive-generated `::backendconf::` paths resolve inside this crate.
extern crate self as backendconf;

#[doc(hidden)]
pub mod de;

mod descriptor;
mod error;
mod lookup;
mod profile;
pub mod profiles;
mod value;

pub use backendconf_derive::Profile;
pub use descriptor::FieldDescriptor;
pub use error::ConfError;
pub use lookup::{Lookup, ProcessEnv};
pub use profile::{ConfigPath, Profile};
pub use profiles::{
    ClickhouseConfig, CoreConfig, ElasticsearchConfig, HttpConfig, PostgresConfig, RedshiftConfig,
};
pub use value::FromEnvStr;

// Re-export for callers naming `from_env()`'s return type
#[doc(hidden)]
pub use anyhow;
