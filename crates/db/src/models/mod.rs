//! Row models and DTOs.
//!
//! Every table has a `*Row` struct that mirrors its snake_case columns and
//! an explicit conversion into the camelCase API shape. Enum columns are
//! stored as text and parsed during that conversion.

pub mod contact_submission;
pub mod piece;

use portfolio_core::error::CoreError;

/// Convert a fetched row into its API model, surfacing a bad enum value as
/// a sqlx decode error.
pub(crate) fn map_row<R, T>(row: R) -> Result<T, sqlx::Error>
where
    T: TryFrom<R, Error = CoreError>,
{
    T::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
