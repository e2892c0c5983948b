//! Converter errors.

/// Error constructing a [`Converter`](crate::Converter).
///
/// Conversion itself never fails; anomalies in the input end up in the
/// info and fallout lists of the [`Conversion`](crate::Conversion).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unknown stylesheet: {0}")]
    UnknownStylesheet(String),
}
