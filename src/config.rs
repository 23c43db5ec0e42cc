// src/config.rs
//! Scoring configuration: profile feature weights and the per-mode blend
//! weight pairs.
//!
//! Loads from TOML (path overridable via `RECOMMENDER_CONFIG_PATH`); a
//! missing file falls back to the compiled-in defaults, a present but
//! malformed file is a hard error so a bad deploy fails at startup instead
//! of scoring with half-read weights.
//!
//! TOML shape:
//!
//! ```toml
//! [profile]
//! skill = 1.0
//! category = 0.6
//! delivery = 0.4
//! term = 0.2
//! term_match_factor = 0.1
//!
//! [history]
//! content = 0.6
//! collab = 0.4
//!
//! [interest]
//! content = 0.7
//! collab = 0.3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/recommender.toml";
pub const ENV_CONFIG_PATH: &str = "RECOMMENDER_CONFIG_PATH";

/// Default result size for the public entry points.
pub const DEFAULT_TOP_N: usize = 6;

/// Weights accumulated into a profile per course feature, plus the dampening
/// factor applied to term-pattern matches at content-scoring time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileWeights {
    pub skill: f64,
    pub category: f64,
    pub delivery: f64,
    pub term: f64,
    pub term_match_factor: f64,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            skill: 1.0,
            category: 0.6,
            delivery: 0.4,
            term: 0.2,
            term_match_factor: 0.1,
        }
    }
}

/// A content/collaborative weight pair for one recommendation mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BlendWeights {
    pub content: f64,
    pub collab: f64,
}

impl BlendWeights {
    pub fn combine(&self, content: f64, collab: f64) -> f64 {
        self.content * content + self.collab * collab
    }
}

fn default_history_blend() -> BlendWeights {
    BlendWeights {
        content: 0.6,
        collab: 0.4,
    }
}

fn default_interest_blend() -> BlendWeights {
    BlendWeights {
        content: 0.7,
        collab: 0.3,
    }
}

/// Full scoring configuration. `Default` yields the standard weights.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub profile: ProfileWeights,
    #[serde(default = "default_history_blend")]
    pub history: BlendWeights,
    #[serde(default = "default_interest_blend")]
    pub interest: BlendWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            profile: ProfileWeights::default(),
            history: default_history_blend(),
            interest: default_interest_blend(),
        }
    }
}

impl ScoringConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("invalid scoring config")
    }

    /// Load from `RECOMMENDER_CONFIG_PATH`, or `config/recommender.toml`
    /// when unset. A missing file yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from_file(&path)
    }

    /// Load from an explicit path; absent file → defaults, unreadable or
    /// malformed file → error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read scoring config at {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse scoring config at {}", path.display()))
    }
}
