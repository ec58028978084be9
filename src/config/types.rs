use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BrowseEaseConfig {
    pub sequencer: Option<SequencerConfig>,
    pub server: Option<ServerConfig>,
    /// JSON or YAML file replacing the built-in catalog
    pub fixtures: Option<String>,
}

impl BrowseEaseConfig {
    pub fn sequencer(&self) -> SequencerConfig {
        self.sequencer.clone().unwrap_or_default()
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
}

/// Playback timing in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SequencerConfig {
    pub step_delay_ms: u64,
    pub jitter_ms: u64,
    pub results_reveal_ms: u64,
    pub summary_reveal_ms: u64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 800,
            jitter_ms: 400,
            results_reveal_ms: 500,
            summary_reveal_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
