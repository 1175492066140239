use std::fmt;

use super::redacted;
use crate::Profile;

/// Columnar warehouse connection.
///
/// Either `connection_string` or the discrete fields are used; the caller
/// decides which.
#[derive(Clone, PartialEq, Eq, Profile)]
pub struct RedshiftConfig {
    #[conf(name = "REDSHIFT_STRING")]
    pub connection_string: String,

    #[conf(name = "REDSHIFT_HOST")]
    pub host: String,

    #[conf(name = "REDSHIFT_PORT")]
    pub port: i64,

    #[conf(name = "REDSHIFT_USER")]
    pub user: String,

    #[conf(name = "REDSHIFT_PASSWORD")]
    pub password: String,

    #[conf(name = "REDSHIFT_DATABASE")]
    pub database: String,

    /// Staging bucket for bulk loads
    #[conf(name = "REDSHIFT_BUCKET", default = "rdshftbucket")]
    pub bucket: String,
}

impl fmt::Debug for RedshiftConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedshiftConfig")
            .field("connection_string", &redacted(&self.connection_string))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &redacted(&self.password))
            .field("database", &self.database)
            .field("bucket", &self.bucket)
            .finish()
    }
}
