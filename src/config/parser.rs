use std::path::Path;
use crate::errors::BrowseEaseError;
use super::types::{BrowseEaseConfig, SequencerConfig};
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

const MAX_DELAY_MS: u64 = 60_000;

pub async fn parse_config(path: &Path) -> Result<BrowseEaseConfig, BrowseEaseError> {
    if !path.exists() {
        return Err(BrowseEaseError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(BrowseEaseError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    let config: BrowseEaseConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config, path.parent())?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), BrowseEaseError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| BrowseEaseError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| BrowseEaseError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory: typed parsing below is the hard gate.
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Checks the schema cannot express. Relative fixture paths resolve against
/// the config file's directory. A missing fixtures file is a config error
/// here, ahead of `FixtureCatalog::load`.
fn validate_semantics(config: &BrowseEaseConfig, base_dir: Option<&Path>) -> Result<(), BrowseEaseError> {
    validate_delays(&config.sequencer())?;

    if config.server().port == 0 {
        return Err(BrowseEaseError::Config("server.port must be non-zero".into()));
    }

    if let Some(fixtures) = &config.fixtures {
        let path = resolve_fixture_path(fixtures, base_dir);
        if !path.exists() {
            return Err(BrowseEaseError::Config(format!(
                "Fixtures file not found: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Every playback delay must stay within `MAX_DELAY_MS`. Also applied to
/// command-line overrides.
pub fn validate_delays(seq: &SequencerConfig) -> Result<(), BrowseEaseError> {
    for (name, value) in [
        ("step_delay_ms", seq.step_delay_ms),
        ("jitter_ms", seq.jitter_ms),
        ("results_reveal_ms", seq.results_reveal_ms),
        ("summary_reveal_ms", seq.summary_reveal_ms),
    ] {
        if value > MAX_DELAY_MS {
            return Err(BrowseEaseError::Config(format!(
                "sequencer.{} = {} exceeds the {}ms limit",
                name, value, MAX_DELAY_MS
            )));
        }
    }
    Ok(())
}

pub fn resolve_fixture_path(fixtures: &str, base_dir: Option<&Path>) -> std::path::PathBuf {
    let path = Path::new(fixtures);
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_semantics_default_config() {
        assert!(validate_semantics(&BrowseEaseConfig::default(), None).is_ok());
    }

    #[test]
    fn test_validate_semantics_rejects_long_delay() {
        let config = BrowseEaseConfig {
            sequencer: Some(SequencerConfig {
                step_delay_ms: 120_000,
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = validate_semantics(&config, None).unwrap_err();
        assert!(err.to_string().contains("step_delay_ms"));
    }

    #[test]
    fn test_validate_delays_bounds() {
        let at_limit = SequencerConfig {
            summary_reveal_ms: MAX_DELAY_MS,
            ..Default::default()
        };
        assert!(validate_delays(&at_limit).is_ok());

        let over = SequencerConfig {
            jitter_ms: MAX_DELAY_MS + 1,
            ..Default::default()
        };
        let err = validate_delays(&over).unwrap_err();
        assert!(err.to_string().contains("jitter_ms"));
    }

    #[test]
    fn test_validate_semantics_missing_fixture() {
        let config = BrowseEaseConfig {
            fixtures: Some("does-not-exist.yaml".into()),
            ..Default::default()
        };
        assert!(validate_semantics(&config, Some(Path::new("/nonexistent"))).is_err());
    }

    #[test]
    fn test_resolve_fixture_path_relative_and_absolute() {
        let base = Path::new("/etc/browseease");
        assert_eq!(
            resolve_fixture_path("phones.yaml", Some(base)),
            Path::new("/etc/browseease/phones.yaml")
        );
        assert_eq!(
            resolve_fixture_path("/data/phones.yaml", Some(base)),
            Path::new("/data/phones.yaml")
        );
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let err = parse_config(Path::new("/nonexistent/browseease.yaml")).await.unwrap_err();
        assert!(matches!(err, BrowseEaseError::Config(_)));
    }
}
