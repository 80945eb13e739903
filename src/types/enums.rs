//! Enumerations used in requests and responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File formats accepted and produced by data processing jobs.
///
/// # Example
///
/// ```rust
/// use schlep_engine::DataFormat;
///
/// let format: DataFormat = "parquet".parse().unwrap();
/// assert_eq!(format, DataFormat::Parquet);
/// assert_eq!(format.to_string(), "parquet");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    /// Comma-separated values.
    Csv,
    /// JSON documents.
    Json,
    /// Excel workbooks.
    Xlsx,
    /// Apache Parquet.
    Parquet,
    /// Apache Avro.
    Avro,
    /// Apache ORC.
    Orc,
}

impl DataFormat {
    /// Returns the wire name of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
            Self::Parquet => "parquet",
            Self::Avro => "avro",
            Self::Orc => "orc",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            "parquet" => Ok(Self::Parquet),
            "avro" => Ok(Self::Avro),
            "orc" => Ok(Self::Orc),
            _ => Err(ConfigError::UnknownEnumValue {
                kind: "DataFormat",
                value: s.to_string(),
            }),
        }
    }
}

/// Machine learning task categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MlTaskType {
    /// Assigning inputs to discrete classes.
    Classification,
    /// Predicting continuous values.
    Regression,
    /// Grouping unlabeled inputs.
    Clustering,
    /// Detecting outliers.
    AnomalyDetection,
    /// Forecasting ordered observations.
    TimeSeries,
    /// Natural language processing.
    Nlp,
    /// Image and video understanding.
    ComputerVision,
}

impl MlTaskType {
    /// Returns the wire name of this task type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Regression => "regression",
            Self::Clustering => "clustering",
            Self::AnomalyDetection => "anomaly_detection",
            Self::TimeSeries => "time_series",
            Self::Nlp => "nlp",
            Self::ComputerVision => "computer_vision",
        }
    }
}

impl fmt::Display for MlTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MlTaskType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classification" => Ok(Self::Classification),
            "regression" => Ok(Self::Regression),
            "clustering" => Ok(Self::Clustering),
            "anomaly_detection" => Ok(Self::AnomalyDetection),
            "time_series" => Ok(Self::TimeSeries),
            "nlp" => Ok(Self::Nlp),
            "computer_vision" => Ok(Self::ComputerVision),
            _ => Err(ConfigError::UnknownEnumValue {
                kind: "MlTaskType",
                value: s.to_string(),
            }),
        }
    }
}
