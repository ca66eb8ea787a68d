use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

use business::domain::errors::RepositoryError;

/// Money columns are `NUMERIC`; the domain works in `f64`.
pub(crate) fn to_f64(value: &BigDecimal) -> Result<f64, RepositoryError> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(RepositoryError::CorruptedRecord)
}

pub(crate) fn from_f64(value: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(value).ok_or(RepositoryError::CorruptedRecord)
}
