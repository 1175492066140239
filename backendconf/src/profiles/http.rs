use std::fmt;
use std::time::Duration;

use super::redacted;
use crate::Profile;

/// HTTP server settings.
#[derive(Clone, PartialEq, Eq, Profile)]
pub struct HttpConfig {
    /// Bind host; empty is left to the server to interpret
    #[conf(name = "HTTP_HOST", default = "")]
    pub host: String,

    #[conf(name = "HTTP_PORT", required)]
    pub port: String,

    #[conf(name = "HTTP_TIMEOUT", default = "60s")]
    pub timeout: Duration,

    /// Largest accepted request body, in bytes
    #[conf(name = "JSON_SIZE_LIMIT", default = "131072")]
    pub json_size_limit: i64,

    /// Send permissive CORS headers
    #[conf(name = "USE_CORS", default = "false")]
    pub use_cors: bool,

    #[conf(name = "JWT_SECRET")]
    pub jwt_secret: String,

    #[conf(name = "JWT_SPOT_SECRET")]
    pub jwt_spot_secret: String,
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .field("json_size_limit", &self.json_size_limit)
            .field("use_cors", &self.use_cors)
            .field("jwt_secret", &redacted(&self.jwt_secret))
            .field("jwt_spot_secret", &redacted(&self.jwt_spot_secret))
            .finish()
    }
}
