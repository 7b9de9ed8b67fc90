#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use crate::config::models::MonitorConfig;
    use crate::config::parser::{load_config, parse_config, ConfigError};

    // Helper function to create a temporary file with content
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_valid_configuration() {
        let config_yaml = r#"
        station_url: https://gas.example.com/json/ethgasAPI.json
        interval_minutes: 1.5
        request_timeout_secs: 10
        optimization_enabled: false
        suppress_logs: true
        default_tier: 3
        "#;

        let temp_file = create_temp_file(config_yaml);
        let config = load_config(temp_file.path()).expect("Failed to load valid config");

        assert_eq!(config.station_url, "https://gas.example.com/json/ethgasAPI.json");
        assert_eq!(config.interval_minutes, 1.5);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.optimization_enabled);
        assert!(config.suppress_logs);
        assert_eq!(config.default_tier, 3);
        assert_eq!(config.refresh_interval(), Duration::from_secs(90));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_minimal_configuration_uses_defaults() {
        let config_yaml = r#"
        suppress_logs: true
        "#;

        let config = parse_config(config_yaml).expect("Failed to parse minimal config");

        assert_eq!(config.station_url, "https://ethgasstation.info/json/ethgasAPI.json");
        assert_eq!(config.interval_minutes, 3.0);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.optimization_enabled);
        assert!(config.suppress_logs);
        assert_eq!(config.default_tier, 2);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = parse_config("   \n").expect("Empty config should be accepted");
        let default = MonitorConfig::default();

        assert_eq!(config.station_url, default.station_url);
        assert_eq!(config.interval_minutes, default.interval_minutes);
        assert_eq!(config.default_tier, default.default_tier);
    }

    #[test]
    fn test_default_refresh_interval_is_three_minutes() {
        let config = MonitorConfig::default();
        assert_eq!(config.refresh_interval(), Duration::from_secs(180));
    }

    #[test]
    fn test_invalid_station_url() {
        let config_yaml = r#"
        station_url: not-a-url
        "#;

        let result = parse_config(config_yaml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_non_positive_interval() {
        for interval in ["0", "-2.5", "1e-12", ".nan"] {
            let config_yaml = format!("interval_minutes: {}", interval);
            let result = parse_config(&config_yaml);
            assert!(
                matches!(result, Err(ConfigError::ValidationError(_))),
                "interval {} should be rejected",
                interval
            );
        }
    }

    #[test]
    fn test_default_tier_out_of_range() {
        for tier in ["0", "5"] {
            let config_yaml = format!("default_tier: {}", tier);
            let result = parse_config(&config_yaml);
            assert!(
                matches!(result, Err(ConfigError::ValidationError(_))),
                "tier {} should be rejected",
                tier
            );
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let config_yaml = r#"
        interval_minutes: [1, 2
        "#;

        let result = parse_config(config_yaml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_config_path() {
        if let Ok(path) = crate::config::parser::default_config_path() {
            assert!(path.ends_with(".gasstation/config.yaml"));
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/gasstation/config.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
