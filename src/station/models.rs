use serde::de::{DeserializeOwned, Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::fetcher::FetchError;

/// Typed view of the station document.
///
/// Prices are in tenths of a gwei, waits in minutes. The passthrough fields are
/// decoded on a best-effort basis; a malformed passthrough value reads as `None`
/// rather than failing the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationReport {
    #[serde(deserialize_with = "number_or_string")]
    pub safe_low: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub average: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub fast: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub fastest: f64,

    #[serde(deserialize_with = "number_or_string")]
    pub safe_low_wait: f64,
    #[serde(rename = "avgWait", deserialize_with = "number_or_string")]
    pub average_wait: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub fast_wait: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub fastest_wait: f64,

    /// Average block time in seconds
    #[serde(rename = "block_time", default, deserialize_with = "lenient")]
    pub block_time: Option<f64>,
    /// Block the estimate was computed at
    #[serde(default, deserialize_with = "lenient")]
    pub block_num: Option<u64>,
    /// Network congestion score
    #[serde(default, deserialize_with = "lenient")]
    pub speed: Option<f64>,
    /// Price level (deci-gwei, as a string) to expected wait
    #[serde(default, deserialize_with = "lenient")]
    pub gas_price_range: Option<BTreeMap<String, f64>>,
}

impl StationReport {
    /// Decodes and sanity-checks a raw station document
    pub fn from_value(value: &Value) -> Result<Self, FetchError> {
        let report = Self::deserialize(value)
            .map_err(|e| FetchError::InvalidReport(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }

    /// Reported (deci-gwei price, wait) pairs from SafeLow to Fastest
    pub fn tiers(&self) -> [(f64, f64); 4] {
        [
            (self.safe_low, self.safe_low_wait),
            (self.average, self.average_wait),
            (self.fast, self.fast_wait),
            (self.fastest, self.fastest_wait),
        ]
    }

    fn validate(&self) -> Result<(), FetchError> {
        let prices = [
            ("safeLow", self.safe_low),
            ("average", self.average),
            ("fast", self.fast),
            ("fastest", self.fastest),
        ];
        let waits = [
            ("safeLowWait", self.safe_low_wait),
            ("avgWait", self.average_wait),
            ("fastWait", self.fast_wait),
            ("fastestWait", self.fastest_wait),
        ];

        for (name, value) in prices {
            if !value.is_finite() || value <= 0.0 {
                return Err(FetchError::InvalidReport(format!(
                    "field '{}' must be a positive number, found {}",
                    name, value
                )));
            }
        }

        for (name, value) in waits {
            if !value.is_finite() || value < 0.0 {
                return Err(FetchError::InvalidReport(format!(
                    "field '{}' must be a non-negative number, found {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("failed to parse string '{}' as f64", s))),
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
