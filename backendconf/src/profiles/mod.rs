//! Profiles shared by the backend services
//!
//! Each profile is bound once at startup and read-only afterwards. Services
//! pick the profiles they need and bind each one independently:
//!
//! ```rust
//! use backendconf::{HttpConfig, PostgresConfig, Profile};
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = [
//!     ("POSTGRES_STRING", "postgres://db/app"),
//!     ("HTTP_PORT", "8080"),
//! ];
//! let postgres = PostgresConfig::bind(&env)?;
//! let http = HttpConfig::bind(&env)?;
//!
//! assert_eq!(
//!     postgres.normalized_connection_string(),
//!     "postgres://db/app?application_name=worker"
//! );
//! assert_eq!(http.port, "8080");
//! # Ok(())
//! # }
//! ```

mod clickhouse;
mod elasticsearch;
mod http;
mod limits;
mod postgres;
mod redshift;

pub use clickhouse::ClickhouseConfig;
pub use elasticsearch::ElasticsearchConfig;
pub use http::HttpConfig;
pub use limits::CoreConfig;
pub use postgres::PostgresConfig;
pub use redshift::RedshiftConfig;

/// Placeholder printed by `Debug` in place of a configured secret.
fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

#[cfg(test)]
pub(crate) const EMPTY_ENV: [(&str, &str); 0] = [];
