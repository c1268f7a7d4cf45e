//! The wage-rate table and its YAML loader.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// The four fixed hourly wage rates, in currency minor units (yen).
///
/// Immutable for the process lifetime. The band *boundaries* (13:00 and
/// 17:00) are fixed in [`crate::calculation`]; only the rates themselves are
/// configurable.
///
/// # Example
///
/// ```
/// use wage_engine::config::WageRateTable;
/// use rust_decimal::Decimal;
///
/// let rates = WageRateTable::default();
/// assert_eq!(rates.base, Decimal::from(1140));
/// assert_eq!(rates.weekend_holiday, Decimal::from(1290));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WageRateTable {
    /// Base hourly rate for weekday hours before 13:00.
    pub base: Decimal,
    /// Flat hourly rate for weekends and public holidays.
    pub weekend_holiday: Decimal,
    /// Hourly rate for weekday hours from 13:00 to 17:00.
    pub weekday_afternoon: Decimal,
    /// Hourly rate for weekday hours from 17:00 onward.
    pub weekday_evening: Decimal,
}

impl Default for WageRateTable {
    fn default() -> Self {
        Self {
            base: Decimal::from(1140),
            weekend_holiday: Decimal::from(1290),
            weekday_afternoon: Decimal::from(1190),
            weekday_evening: Decimal::from(1290),
        }
    }
}

impl WageRateTable {
    /// Loads a rate table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read,
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML or
    /// contains a non-positive rate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wage_engine::config::WageRateTable;
    ///
    /// let rates = WageRateTable::from_yaml_file("config/rates.yaml")?;
    /// # Ok::<(), wage_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let table: Self =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        table.validate(&path_str)?;
        Ok(table)
    }

    /// Rejects tables with non-positive rates.
    fn validate(&self, path: &str) -> EngineResult<()> {
        let rates = [
            ("base", self.base),
            ("weekend_holiday", self.weekend_holiday),
            ("weekday_afternoon", self.weekday_afternoon),
            ("weekday_evening", self.weekday_evening),
        ];
        for (name, rate) in rates {
            if rate <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("rate '{name}' must be positive, got {rate}"),
                });
            }
        }
        Ok(())
    }
}
