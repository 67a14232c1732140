//! Utilities for working with Arrow arrays.
//!
//! Column extraction with clear errors, plus Date32 conversions for the
//! registry date columns.

use arrow::array::{Array, ArrayRef, Date32Array, StringArray};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use log::{debug, warn};

use crate::error::{HerdbookError, Result};

/// Days from 0001-01-01 (CE) to the Unix epoch
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Get a column from a record batch, casting it when the stored type differs
///
/// * `Ok(Some(ArrayRef))` - The column array (cast if necessary) if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err(_)` - If a required column is missing or the cast fails
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Some(column) = batch.column_by_name(column_name) else {
        if required {
            return Err(HerdbookError::column(column_name, "required column not found"));
        }
        warn!("Column '{column_name}' not found in record batch");
        return Ok(None);
    };

    let actual_type = column.data_type();
    if actual_type == expected_type {
        return Ok(Some(column.clone()));
    }

    debug!("Casting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    let converted = cast(column, expected_type).map_err(|e| {
        HerdbookError::column(
            column_name,
            format!("cannot convert {actual_type:?} to {expected_type:?}: {e}"),
        )
    })?;
    Ok(Some(converted))
}

/// Downcast a column to a specific array type with clear error messages
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        HerdbookError::column(
            column_name,
            format!("expected {expected_type_name} array, found {:?}", array.data_type()),
        )
    })
}

/// Read an optional string value
#[must_use]
pub fn string_value(array: &StringArray, row: usize) -> Option<String> {
    (!array.is_null(row)).then(|| array.value(row).to_string())
}

/// Read an optional date value
#[must_use]
pub fn date_value(array: &Date32Array, row: usize) -> Option<NaiveDate> {
    if array.is_null(row) {
        None
    } else {
        date32_to_naive_date(array.value(row))
    }
}

/// Convert Arrow Date32 (days since the Unix epoch) to `NaiveDate`
#[must_use]
pub fn date32_to_naive_date(days_since_epoch: i32) -> Option<NaiveDate> {
    days_since_epoch
        .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Convert `NaiveDate` to Arrow Date32
#[must_use]
pub fn naive_date_to_date32(date: NaiveDate) -> i32 {
    use chrono::Datelike;
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}
