//! Configuration integration tests

#[cfg(test)]
mod tests {
    use readyroom::config::Config;
    use readyroom::{MemorySources, PermissionSources, Readyroom};
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_file_drives_resolver() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
permissions:
  session_ttl_seconds: 300
  max_sessions: 50
database:
  url: "sqlite::memory:"
  max_connections: 1
logging:
  level: "readyroom=debug"
  json: true
"#
        )
        .unwrap();

        let config = crate::assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.permissions.session_ttl(), Some(Duration::from_secs(300)));
        assert_eq!(config.permissions.max_sessions, 50);
        assert!(config.database.is_sqlite());
        assert!(config.logging.json);

        let readyroom = crate::assert_ok!(Readyroom::with_sources(
            config,
            PermissionSources::shared(Arc::new(MemorySources::new())),
        ));
        assert_eq!(readyroom.config().permissions.max_sessions, 50);
    }

    #[tokio::test]
    async fn test_missing_config_file_is_config_error() {
        let result = Config::from_file("/nonexistent/readyroom.yaml").await;
        assert!(matches!(result, Err(readyroom::ReadyroomError::Config(_))));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let vars = vec![
            ("READYROOM_SESSION_TTL".to_string(), "60".to_string()),
            ("READYROOM_DATABASE_URL".to_string(), "postgres://localhost/readyroom".to_string()),
            ("UNRELATED".to_string(), "ignored".to_string()),
        ];

        let config = crate::assert_ok!(Config::from_env_vars(vars));
        assert_eq!(config.permissions.session_ttl_seconds, Some(60));
        assert!(!config.database.is_sqlite());
        assert_eq!(config.logging.level, "info");
    }
}
