//! deltachart configuration file handling

use anyhow::{Context, Result};
use deltachart_charts::{AnalysisChartConfig, SELECTION_THRESHOLD_PX};
use deltachart_core::{Error, ScalingMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration (deltachart.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeltaChartConfig {
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Chart interaction settings
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Initial Y-axis scaling mode (`fixed-zero`, `fixed`, `rescale`)
    #[serde(default)]
    pub scaling_mode: ScalingMode,
    /// Drags no wider than this many pixels are treated as clicks
    #[serde(default = "default_threshold")]
    pub selection_threshold_px: f64,
    /// Plot width in pixels used to map pixel coordinates to time
    #[serde(default = "default_plot_width")]
    pub plot_width: f64,
}

fn default_threshold() -> f64 {
    SELECTION_THRESHOLD_PX
}

fn default_plot_width() -> f64 {
    1100.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scaling_mode: ScalingMode::default(),
            selection_threshold_px: default_threshold(),
            plot_width: default_plot_width(),
        }
    }
}

impl DeltaChartConfig {
    /// Load configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DeltaChartConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), Error> {
        let chart = &self.chart;
        if !(chart.selection_threshold_px.is_finite() && chart.selection_threshold_px >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "selection_threshold_px must be a non-negative number (got {})",
                chart.selection_threshold_px
            )));
        }
        if !(chart.plot_width.is_finite() && chart.plot_width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "plot_width must be positive (got {})",
                chart.plot_width
            )));
        }
        Ok(())
    }

    pub fn analysis_config(&self) -> AnalysisChartConfig {
        AnalysisChartConfig {
            scaling_mode: self.chart.scaling_mode,
            selection_threshold_px: self.chart.selection_threshold_px,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
