use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const DEFAULT_SETTINGS_PATH: &str = "skyburst.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("bad command line: {0}")]
    Cli(String),
}

/// Runtime options. Every field has a default so a partial file is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowSettings {
    /// RNG seed; `None` seeds from the clock at startup.
    pub seed: Option<u64>,
    pub auto_launch: bool,
    pub sound_enabled: bool,
    pub sound_path: String,
    pub opening_burst: usize,
    pub opening_delay_secs: f64,
    pub ambient_sparkles: bool,
    pub show_hud: bool,
    /// Replaces the built-in fortunes when non-empty.
    pub fortunes: Vec<String>,
}

impl Default for ShowSettings {
    fn default() -> Self {
        Self {
            seed: None,
            auto_launch: true,
            sound_enabled: true,
            sound_path: "assets/firework_blast.wav".to_string(),
            opening_burst: config::OPENING_BURST,
            opening_delay_secs: config::OPENING_DELAY_SECS,
            ambient_sparkles: true,
            show_hud: false,
            fortunes: Vec::new(),
        }
    }
}

impl ShowSettings {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.opening_delay_secs.is_finite() && self.opening_delay_secs >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "opening_delay_secs",
                reason: format!("must be a non-negative number, got {}", self.opening_delay_secs),
            });
        }
        if let Some(idx) = self.fortunes.iter().position(|f| f.trim().is_empty()) {
            return Err(SettingsError::Invalid {
                field: "fortunes",
                reason: format!("entry {idx} is blank"),
            });
        }
        Ok(())
    }
}

/// Parsed command line: `[--config PATH] [--seed N] [--mute] [--no-auto] [--hud]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub mute: bool,
    pub no_auto: bool,
    pub hud: bool,
}

impl CliOptions {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, SettingsError> {
        let mut opts = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| SettingsError::Cli("--config requires a path".to_string()))?;
                    opts.config_path = Some(PathBuf::from(path));
                }
                "--seed" => {
                    let value = args
                        .next()
                        .ok_or_else(|| SettingsError::Cli("--seed requires a value".to_string()))?;
                    let seed = value
                        .parse()
                        .map_err(|_| SettingsError::Cli(format!("invalid seed: {value}")))?;
                    opts.seed = Some(seed);
                }
                "--mute" => opts.mute = true,
                "--no-auto" => opts.no_auto = true,
                "--hud" => opts.hud = true,
                other => return Err(SettingsError::Cli(format!("unknown option: {other}"))),
            }
        }
        Ok(opts)
    }

    /// Command-line flags win over file values.
    pub fn apply(&self, settings: &mut ShowSettings) {
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.mute {
            settings.sound_enabled = false;
        }
        if self.no_auto {
            settings.auto_launch = false;
        }
        if self.hud {
            settings.show_hud = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let s = ShowSettings::from_json(Path::new("t.json"), r#"{ "seed": 42, "auto_launch": false }"#)
            .unwrap();
        assert_eq!(s.seed, Some(42));
        assert!(!s.auto_launch);
        assert!(s.sound_enabled);
        assert_eq!(s.opening_burst, config::OPENING_BURST);
        assert!(s.fortunes.is_empty());
    }

    #[test]
    fn malformed_json_reports_path() {
        let err = ShowSettings::from_json(Path::new("broken.json"), "{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn rejects_blank_fortune_and_negative_delay() {
        let err = ShowSettings::from_json(Path::new("t.json"), r#"{ "fortunes": ["ok", "  "] }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "fortunes", .. }));

        let err = ShowSettings::from_json(Path::new("t.json"), r#"{ "opening_delay_secs": -1.0 }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "opening_delay_secs", .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ShowSettings::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let opts = CliOptions::parse(args(&["--seed", "7", "--mute", "--no-auto", "--config", "x.json"]))
            .unwrap();
        assert_eq!(opts.config_path, Some(PathBuf::from("x.json")));

        let mut settings = ShowSettings::default();
        opts.apply(&mut settings);
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.sound_enabled);
        assert!(!settings.auto_launch);
        assert!(!settings.show_hud);
    }

    #[test]
    fn cli_rejects_unknown_and_incomplete_flags() {
        assert!(matches!(CliOptions::parse(args(&["--bogus"])), Err(SettingsError::Cli(_))));
        assert!(matches!(CliOptions::parse(args(&["--seed"])), Err(SettingsError::Cli(_))));
        assert!(matches!(CliOptions::parse(args(&["--seed", "abc"])), Err(SettingsError::Cli(_))));
    }
}
