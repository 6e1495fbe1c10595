use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::internal::catalog::{CLASSIC_CATALOG, Recommendation, STUDIO_CATALOG};
use crate::internal::pipeline::AnalysisScript;
use crate::internal::upload::DEFAULT_MAX_UPLOAD_BYTES;

/// Which flavour of the analyzer to run.
///
/// `Guided` walks the five status labels and samples 4 cards; `Instant`
/// auto-starts after upload, waits once, and shows the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AnalysisMode {
    #[default]
    Guided,
    Instant,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing level when RUST_LOG is not set (e.g. "info").
    pub level: String,
    /// Directory for the rotating log file; defaults to "logs".
    pub log_directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_directory: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub analysis_mode: AnalysisMode,
    /// Hold per status label in Guided mode, in milliseconds.
    #[serde(default = "default_step_hold_ms")]
    pub step_hold_ms: u64,
    /// Single wait in Instant mode, in milliseconds.
    #[serde(default = "default_instant_wait_ms")]
    pub instant_wait_ms: u64,
    /// How many cards Guided mode samples from its catalog.
    #[serde(default = "default_picks")]
    pub picks: usize,
    /// Fixed sampling seed; unset means seeded from the OS.
    pub sample_seed: Option<u64>,
    /// Upload size ceiling in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
    /// Where the HTML report lands on export.
    #[serde(default = "default_export_path")]
    pub export_path: String,
    /// Open the exported report in the system browser.
    pub open_after_export: bool,
    pub logging: LoggingConfig,
}

fn default_step_hold_ms() -> u64 {
    800
}

fn default_instant_wait_ms() -> u64 {
    3000
}

fn default_picks() -> usize {
    4
}

fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_export_path() -> String {
    "results.html".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_mode: AnalysisMode::default(),
            step_hold_ms: default_step_hold_ms(),
            instant_wait_ms: default_instant_wait_ms(),
            picks: default_picks(),
            sample_seed: None,
            max_upload_bytes: default_max_upload_bytes(),
            export_path: default_export_path(),
            open_after_export: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        // Look for config.ron in current directory or next to executable
        let mut candidates = Vec::new();

        candidates.push(PathBuf::from("config.ron"));

        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join("config.ron"));
        }

        for path in candidates {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match ron::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse config at {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Self::default()
    }

    /// Analysis delay script for the configured mode.
    pub fn analysis_script(&self) -> AnalysisScript {
        match self.analysis_mode {
            AnalysisMode::Guided => AnalysisScript::guided(Duration::from_millis(self.step_hold_ms)),
            AnalysisMode::Instant => {
                AnalysisScript::instant(Duration::from_millis(self.instant_wait_ms))
            }
        }
    }

    /// Catalog the configured mode draws from.
    pub fn catalog(&self) -> &'static [Recommendation] {
        match self.analysis_mode {
            AnalysisMode::Guided => &STUDIO_CATALOG,
            AnalysisMode::Instant => &CLASSIC_CATALOG,
        }
    }

    /// Instant mode skips the analyze keypress and starts on acceptance.
    pub fn auto_analyze(&self) -> bool {
        self.analysis_mode == AnalysisMode::Instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let config = AppConfig::default();
        assert_eq!(config.analysis_mode, AnalysisMode::Guided);
        assert_eq!(config.step_hold_ms, 800);
        assert_eq!(config.instant_wait_ms, 3000);
        assert_eq!(config.picks, 4);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(!config.auto_analyze());
    }

    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let config: AppConfig = ron::from_str("(analysis_mode: Instant)").unwrap();
        assert_eq!(config.analysis_mode, AnalysisMode::Instant);
        assert_eq!(config.picks, 4);
        assert!(config.auto_analyze());
        assert_eq!(config.catalog().len(), 6);
    }

    #[test]
    fn script_shape_follows_mode() {
        let guided = AppConfig::default();
        assert_eq!(
            guided.analysis_script().total_duration(),
            Duration::from_millis(4000)
        );

        let instant: AppConfig = ron::from_str("(analysis_mode: Instant)").unwrap();
        assert_eq!(
            instant.analysis_script().total_duration(),
            Duration::from_millis(3000)
        );
    }
}
