use std::fmt;

use super::redacted;
use crate::Profile;

/// Relational database connection.
#[derive(Clone, PartialEq, Eq, Profile)]
pub struct PostgresConfig {
    /// Connection string; no service starts without it
    #[conf(name = "POSTGRES_STRING", required)]
    pub connection_string: String,

    /// Reported to the server as `application_name`
    #[conf(name = "SERVICE_NAME", default = "worker")]
    pub application_name: String,
}

impl PostgresConfig {
    /// Connection string tagged with the service's `application_name`.
    ///
    /// The parameter is appended only when the raw string does not already
    /// contain `application_name` anywhere, not just as a query key.
    /// It is joined with `&` when the string already has a `?`, else with `?`.
    pub fn normalized_connection_string(&self) -> String {
        let raw = &self.connection_string;
        if raw.contains("application_name") {
            return raw.clone();
        }

        let separator = if raw.contains('?') { '&' } else { '?' };
        format!("{raw}{separator}application_name={}", self.application_name)
    }
}

impl fmt::Display for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_connection_string())
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("connection_string", &redacted(&self.connection_string))
            .field("application_name", &self.application_name)
            .finish()
    }
}
