//! N-gram corpus statistics: per-word usage time series and corpus totals.

pub mod frequency;
pub mod time_series;

pub use self::frequency::FrequencyStore;
pub use self::time_series::TimeSeries;
