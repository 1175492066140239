use crate::Profile;

/// Search cluster connection.
#[derive(Debug, Clone, PartialEq, Eq, Profile)]
pub struct ElasticsearchConfig {
    /// Comma-separated node URLs
    #[conf(name = "ELASTICSEARCH_URLS")]
    pub urls: String,

    /// Cluster runs inside the AWS managed network
    #[conf(name = "ELASTICSEARCH_IN_AWS", default = "false")]
    pub use_aws: bool,
}

impl ElasticsearchConfig {
    /// `urls` split on `,`.
    ///
    /// Elements are neither trimmed nor filtered, so an empty `urls` yields a
    /// single empty element.
    pub fn url_list(&self) -> Vec<String> {
        self.urls.split(',').map(str::to_string).collect()
    }
}
