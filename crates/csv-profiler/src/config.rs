//! Configuration types for the profiler.
//!
//! The defaults reproduce the standard profiling behaviour (top 5 values,
//! 50%/20% missing-data thresholds, 1.5 x IQR outlier fences, and so on).
//! Use the builder to tune the heuristics.

use serde::{Deserialize, Serialize};

/// Configuration for [`DataProfiler`](crate::DataProfiler) and the quality checks.
///
/// Use [`ProfilerConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust
/// use csv_profiler::ProfilerConfig;
///
/// let config = ProfilerConfig::builder()
///     .top_k(10)
///     .high_missing_pct(40.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.top_k, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Number of most frequent values kept for text columns.
    /// Default: 5
    pub top_k: usize,

    /// Missing percentage above which a column gets a warning.
    /// Default: 50.0
    pub high_missing_pct: f64,

    /// Missing percentage above which a column gets an info note.
    /// Must not exceed `high_missing_pct`.
    /// Default: 20.0
    pub moderate_missing_pct: f64,

    /// Row count the dataset must exceed before low cardinality is reported.
    /// Default: 100
    pub low_cardinality_min_rows: usize,

    /// Numeric columns with fewer unique values than this are low-cardinality.
    /// Default: 5
    pub low_cardinality_max_unique: usize,

    /// Non-missing count a column must exceed to be flagged as an identifier.
    /// Default: 10
    pub identifier_min_count: usize,

    /// Multiplier applied to the IQR for the outlier fences.
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Ratio of standard deviation to |mean| above which variability is high.
    /// Default: 1.0
    pub variability_ratio: f64,

    /// Share of rows (percent) the top text value must exceed to dominate.
    /// Default: 90.0
    pub dominant_value_pct: f64,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            high_missing_pct: 50.0,
            moderate_missing_pct: 20.0,
            low_cardinality_min_rows: 100,
            low_cardinality_max_unique: 5,
            identifier_min_count: 10,
            iqr_multiplier: 1.5,
            variability_ratio: 1.0,
            dominant_value_pct: 90.0,
        }
    }
}

impl ProfilerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.top_k == 0 {
            return Err(ConfigValidationError::InvalidTopK(self.top_k));
        }

        for (field, value) in [
            ("high_missing_pct", self.high_missing_pct),
            ("moderate_missing_pct", self.moderate_missing_pct),
            ("dominant_value_pct", self.dominant_value_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigValidationError::InvalidPercentage {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.moderate_missing_pct > self.high_missing_pct {
            return Err(ConfigValidationError::MissingThresholdOrder {
                moderate: self.moderate_missing_pct,
                high: self.high_missing_pct,
            });
        }

        for (field, value) in [
            ("iqr_multiplier", self.iqr_multiplier),
            ("variability_ratio", self.variability_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigValidationError::InvalidFactor {
                    field: field.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid top_k: {0} (must be at least 1)")]
    InvalidTopK(usize),

    #[error("Invalid percentage for '{field}': {value} (must be between 0.0 and 100.0)")]
    InvalidPercentage { field: String, value: f64 },

    #[error(
        "moderate_missing_pct ({moderate}) must not exceed high_missing_pct ({high})"
    )]
    MissingThresholdOrder { moderate: f64, high: f64 },

    #[error("Invalid factor for '{field}': {value} (must be a positive number)")]
    InvalidFactor { field: String, value: f64 },
}

/// Builder for [`ProfilerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProfilerConfigBuilder {
    top_k: Option<usize>,
    high_missing_pct: Option<f64>,
    moderate_missing_pct: Option<f64>,
    low_cardinality_min_rows: Option<usize>,
    low_cardinality_max_unique: Option<usize>,
    identifier_min_count: Option<usize>,
    iqr_multiplier: Option<f64>,
    variability_ratio: Option<f64>,
    dominant_value_pct: Option<f64>,
}

impl ProfilerConfigBuilder {
    /// Set how many frequent values are reported for text columns.
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Set the missing percentage that triggers a warning.
    ///
    /// # Arguments
    /// * `pct` - Value between 0.0 and 100.0 (e.g., 50.0 = 50%)
    pub fn high_missing_pct(mut self, pct: f64) -> Self {
        self.high_missing_pct = Some(pct);
        self
    }

    /// Set the missing percentage that triggers an info note.
    pub fn moderate_missing_pct(mut self, pct: f64) -> Self {
        self.moderate_missing_pct = Some(pct);
        self
    }

    /// Set the row count above which low cardinality is reported.
    pub fn low_cardinality_min_rows(mut self, rows: usize) -> Self {
        self.low_cardinality_min_rows = Some(rows);
        self
    }

    /// Set the unique-value count below which a numeric column is low-cardinality.
    pub fn low_cardinality_max_unique(mut self, unique: usize) -> Self {
        self.low_cardinality_max_unique = Some(unique);
        self
    }

    /// Set the count a fully unique column must exceed to be flagged as an identifier.
    pub fn identifier_min_count(mut self, count: usize) -> Self {
        self.identifier_min_count = Some(count);
        self
    }

    /// Set the IQR multiplier for outlier fences.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the std/|mean| ratio above which variability is reported.
    pub fn variability_ratio(mut self, ratio: f64) -> Self {
        self.variability_ratio = Some(ratio);
        self
    }

    /// Set the share of rows a single text value must exceed to be dominant.
    pub fn dominant_value_pct(mut self, pct: f64) -> Self {
        self.dominant_value_pct = Some(pct);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProfilerConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProfilerConfig, ConfigValidationError> {
        let defaults = ProfilerConfig::default();
        let config = ProfilerConfig {
            top_k: self.top_k.unwrap_or(defaults.top_k),
            high_missing_pct: self.high_missing_pct.unwrap_or(defaults.high_missing_pct),
            moderate_missing_pct: self
                .moderate_missing_pct
                .unwrap_or(defaults.moderate_missing_pct),
            low_cardinality_min_rows: self
                .low_cardinality_min_rows
                .unwrap_or(defaults.low_cardinality_min_rows),
            low_cardinality_max_unique: self
                .low_cardinality_max_unique
                .unwrap_or(defaults.low_cardinality_max_unique),
            identifier_min_count: self
                .identifier_min_count
                .unwrap_or(defaults.identifier_min_count),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            variability_ratio: self.variability_ratio.unwrap_or(defaults.variability_ratio),
            dominant_value_pct: self.dominant_value_pct.unwrap_or(defaults.dominant_value_pct),
        };

        config.validate()?;
        Ok(config)
    }
}
