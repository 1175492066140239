use crate::profile::ConfigPath;
use crate::Profile;

/// Limits common to every service.
#[derive(Debug, Clone, PartialEq, Eq, Profile)]
pub struct CoreConfig {
    /// Optional path of a further configuration file
    #[conf(name = "CONFIG_FILE_PATH")]
    pub config_file_path: String,

    /// Largest queue message accepted, in bytes
    #[conf(name = "QUEUE_MESSAGE_SIZE_LIMIT", default = "1048576")]
    pub message_size_limit: i64,

    /// Soft memory ceiling, percent of the memory limit
    #[conf(name = "MAX_MEMORY_USAGE", default = "80")]
    pub max_memory_usage: u64,

    /// Hard memory ceiling in megabytes; 0 means take the limit from the cgroup
    #[conf(name = "MEMORY_LIMIT_MB", default = "0")]
    pub memory_limit_mb: u64,
}

impl ConfigPath for CoreConfig {
    fn config_path(&self) -> &str {
        &self.config_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::EMPTY_ENV;
    use crate::ConfError;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::bind(&EMPTY_ENV).unwrap();

        assert_eq!(config.config_file_path, "");
        assert_eq!(config.config_path(), "");
        assert_eq!(config.message_size_limit, 1_048_576);
        assert_eq!(config.max_memory_usage, 80);
        assert_eq!(config.memory_limit_mb, 0);
    }

    #[test]
    fn test_overrides() {
        let env = [
            ("CONFIG_FILE_PATH", "/etc/service/config.yaml"),
            ("QUEUE_MESSAGE_SIZE_LIMIT", "2048"),
            ("MAX_MEMORY_USAGE", "95"),
            ("MEMORY_LIMIT_MB", "512"),
        ];
        let config = CoreConfig::bind(&env).unwrap();

        assert_eq!(config.config_path(), "/etc/service/config.yaml");
        assert_eq!(config.message_size_limit, 2048);
        assert_eq!(config.max_memory_usage, 95);
        assert_eq!(config.memory_limit_mb, 512);
    }

    #[test]
    fn test_non_numeric_limit_fails() {
        let err = CoreConfig::bind(&[("QUEUE_MESSAGE_SIZE_LIMIT", "abc")]).unwrap_err();
        assert!(matches!(err, ConfError::TypeConversion { .. }));
        assert_eq!(err.key(), "QUEUE_MESSAGE_SIZE_LIMIT");
    }

    #[test]
    fn test_negative_percentage_fails() {
        let err = CoreConfig::bind(&[("MAX_MEMORY_USAGE", "-1")]).unwrap_err();
        assert_eq!(err.key(), "MAX_MEMORY_USAGE");
    }

    #[test]
    fn test_descriptor_table_order() {
        let keys: Vec<_> = CoreConfig::keys().collect();
        assert_eq!(
            keys,
            [
                "CONFIG_FILE_PATH",
                "QUEUE_MESSAGE_SIZE_LIMIT",
                "MAX_MEMORY_USAGE",
                "MEMORY_LIMIT_MB"
            ]
        );
        assert!(CoreConfig::FIELDS.iter().all(|desc| !desc.required));
    }
}
