use std::str::FromStr;

use analytica_core::ProviderError;
use rust_decimal::Decimal;
use sqlx::{Row, TypeInfo, ValueRef};

/// Get a decimal value from a row.
///
/// Accepts TEXT (the storage format written by this crate) as well as
/// INTEGER and REAL values from hand-edited databases. NULL reads as zero.
pub fn get_decimal(
    row: &sqlx::sqlite::SqliteRow,
    column: &str,
) -> Result<Decimal, ProviderError> {
    let value_ref = row
        .try_get_raw(column)
        .map_err(|e| ProviderError::Database(format!("Column '{}' not found: {}", column, e)))?;

    if value_ref.is_null() {
        return Ok(Decimal::ZERO);
    }

    let type_info = value_ref.type_info();
    let type_name = type_info.name();

    match type_name {
        "TEXT" => {
            let val: String = row.try_get(column).map_err(|e| {
                ProviderError::Database(format!("Failed to get TEXT from '{}': {}", column, e))
            })?;
            Decimal::from_str(val.trim()).map_err(|e| {
                ProviderError::Decode(format!("Invalid decimal '{}' in '{}': {}", val, column, e))
            })
        }
        "INTEGER" => {
            let val: i64 = row.try_get(column).map_err(|e| {
                ProviderError::Database(format!(
                    "Failed to get INTEGER from '{}': {}",
                    column, e
                ))
            })?;
            Ok(Decimal::from(val))
        }
        "REAL" => {
            let val: f64 = row.try_get(column).map_err(|e| {
                ProviderError::Database(format!("Failed to get REAL from '{}': {}", column, e))
            })?;
            Decimal::try_from(val).map_err(|e| {
                ProviderError::Decode(format!("Failed to convert {} to Decimal: {}", val, e))
            })
        }
        _ => Err(ProviderError::Database(format!(
            "Unexpected type '{}' for column '{}'",
            type_name, column
        ))),
    }
}

/// Get an optional TEXT value, returning None for NULL.
pub fn get_optional_text(
    row: &sqlx::sqlite::SqliteRow,
    column: &str,
) -> Result<Option<String>, ProviderError> {
    row.try_get(column)
        .map_err(|e| ProviderError::Database(format!("Failed to get TEXT from '{}': {}", column, e)))
}
