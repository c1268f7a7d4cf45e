//! Wage-rate configuration.
//!
//! The four wage rates are process-start constants by default, modeled as an
//! explicit immutable [`WageRateTable`] value passed into the calculator
//! rather than ambient globals. A YAML override file can replace the defaults
//! without recompilation.

mod rates;

pub use rates::WageRateTable;
