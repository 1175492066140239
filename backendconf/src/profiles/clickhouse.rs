use std::fmt;

use super::redacted;
use crate::Profile;

/// Analytics store connection.
#[derive(Clone, PartialEq, Eq, Profile)]
pub struct ClickhouseConfig {
    /// Connection URL, usually `tcp://host:9000/default`
    #[conf(name = "CLICKHOUSE_STRING")]
    pub url: String,

    #[conf(name = "CLICKHOUSE_DATABASE", default = "default")]
    pub database: String,

    #[conf(name = "CLICKHOUSE_USERNAME", default = "default")]
    pub username: String,

    #[conf(name = "CLICKHOUSE_PASSWORD", default = "")]
    pub password: String,

    /// Older deployments still export `CH_USERNAME`
    #[conf(name = "CH_USERNAME", default = "default")]
    pub legacy_username: String,

    #[conf(name = "CH_PASSWORD", default = "")]
    pub legacy_password: String,
}

impl ClickhouseConfig {
    /// `url` without a leading `tcp://` and without a trailing `/default`.
    ///
    /// Each part is stripped independently; a URL carrying neither is
    /// returned as is.
    pub fn trimmed_url(&self) -> String {
        let url = self.url.strip_prefix("tcp://").unwrap_or(&self.url);
        let url = url.strip_suffix("/default").unwrap_or(url);
        url.to_string()
    }
}

impl fmt::Debug for ClickhouseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickhouseConfig")
            .field("url", &self.url)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("legacy_username", &self.legacy_username)
            .field("legacy_password", &redacted(&self.legacy_password))
            .finish()
    }
}
