//! Arrow schema implementations for registry models
//!
//! Animal and reproductive-event snapshots are exchanged as Arrow record
//! batches (and Parquet files). Dates are stored as Date32.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, Date32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::{HerdbookError, Result};
use crate::models::animal::AnimalRecord;
use crate::models::reproduction::ReproductiveEvent;
use crate::models::traits::ArrowSchema;
use crate::models::types::{PregnancyOutcome, Sex};
use crate::utils::arrow::{
    date_value, downcast_array, get_column, naive_date_to_date32, string_value,
};

/// Fetch a required string column
fn required_strings(batch: &RecordBatch, name: &str) -> Result<ArrayRef> {
    get_column(batch, name, &DataType::Utf8, true)?
        .ok_or_else(|| HerdbookError::column(name, "required column not found"))
}

/// Fetch a required date column
fn required_dates(batch: &RecordBatch, name: &str) -> Result<ArrayRef> {
    get_column(batch, name, &DataType::Date32, true)?
        .ok_or_else(|| HerdbookError::column(name, "required column not found"))
}

fn required_value<T>(value: Option<T>, column: &str, row: usize) -> Result<T> {
    value.ok_or_else(|| HerdbookError::column(column, format!("null value in row {row}")))
}

impl ArrowSchema for AnimalRecord {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Utf8, false),
            Field::new("sex", DataType::Utf8, true),
            Field::new("birth_date", DataType::Date32, false),
            Field::new("father_id", DataType::Utf8, true),
            Field::new("mother_id", DataType::Utf8, true),
            Field::new("reproduction_id", DataType::Utf8, true),
            Field::new("current_category", DataType::Utf8, true),
            Field::new("active", DataType::Boolean, true),
        ])
    }

    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let id_column = required_strings(batch, "id")?;
        let ids = downcast_array::<StringArray>(&id_column, "id", "String")?;
        let birth_column = required_dates(batch, "birth_date")?;
        let births = downcast_array::<Date32Array>(&birth_column, "birth_date", "Date32")?;

        // Optional columns; a missing column reads as all-null
        let sex_column = get_column(batch, "sex", &DataType::Utf8, false)?;
        let father_column = get_column(batch, "father_id", &DataType::Utf8, false)?;
        let mother_column = get_column(batch, "mother_id", &DataType::Utf8, false)?;
        let reproduction_column = get_column(batch, "reproduction_id", &DataType::Utf8, false)?;
        let category_column = get_column(batch, "current_category", &DataType::Utf8, false)?;
        let active_column = get_column(batch, "active", &DataType::Boolean, false)?;

        let sexes = sex_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "sex", "String"))
            .transpose()?;
        let fathers = father_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "father_id", "String"))
            .transpose()?;
        let mothers = mother_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "mother_id", "String"))
            .transpose()?;
        let reproductions = reproduction_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "reproduction_id", "String"))
            .transpose()?;
        let categories = category_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "current_category", "String"))
            .transpose()?;
        let actives = active_column
            .as_ref()
            .map(|c| downcast_array::<BooleanArray>(c, "active", "Boolean"))
            .transpose()?;

        let mut animals = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let id = required_value(string_value(ids, row), "id", row)?;
            let birth_date = required_value(date_value(births, row), "birth_date", row)?;
            let sex = sexes
                .and_then(|a| string_value(a, row))
                .map_or(Sex::Unspecified, Sex::from);

            animals.push(Self {
                id,
                sex,
                birth_date,
                father_id: fathers.and_then(|a| string_value(a, row)),
                mother_id: mothers.and_then(|a| string_value(a, row)),
                reproduction_id: reproductions.and_then(|a| string_value(a, row)),
                current_category: categories.and_then(|a| string_value(a, row)),
                active: actives.is_none_or(|a| a.is_null(row) || a.value(row)),
            });
        }

        Ok(animals)
    }

    fn to_record_batch(models: &[Self]) -> Result<RecordBatch> {
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(models.iter().map(|a| a.id.as_str()))),
            Arc::new(
                models
                    .iter()
                    .map(|a| match a.sex {
                        Sex::Unspecified => None,
                        sex => Some(sex.code()),
                    })
                    .collect::<StringArray>(),
            ),
            Arc::new(Date32Array::from_iter_values(
                models.iter().map(|a| naive_date_to_date32(a.birth_date)),
            )),
            Arc::new(models.iter().map(|a| a.father_id.as_deref()).collect::<StringArray>()),
            Arc::new(models.iter().map(|a| a.mother_id.as_deref()).collect::<StringArray>()),
            Arc::new(
                models
                    .iter()
                    .map(|a| a.reproduction_id.as_deref())
                    .collect::<StringArray>(),
            ),
            Arc::new(
                models
                    .iter()
                    .map(|a| a.current_category.as_deref())
                    .collect::<StringArray>(),
            ),
            Arc::new(BooleanArray::from(
                models.iter().map(|a| a.active).collect::<Vec<_>>(),
            )),
        ];

        Ok(RecordBatch::try_new(Self::schema_ref(), columns)?)
    }
}

impl ArrowSchema for ReproductiveEvent {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Utf8, false),
            Field::new("dam_id", DataType::Utf8, false),
            Field::new("sire_id", DataType::Utf8, true),
            Field::new("service_date", DataType::Date32, false),
            Field::new("confirmation_date", DataType::Date32, true),
            Field::new("expected_birth_date", DataType::Date32, true),
            Field::new("actual_birth_date", DataType::Date32, true),
            Field::new("outcome", DataType::Utf8, true),
        ])
    }

    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let id_column = required_strings(batch, "id")?;
        let ids = downcast_array::<StringArray>(&id_column, "id", "String")?;
        let dam_column = required_strings(batch, "dam_id")?;
        let dams = downcast_array::<StringArray>(&dam_column, "dam_id", "String")?;
        let service_column = required_dates(batch, "service_date")?;
        let services = downcast_array::<Date32Array>(&service_column, "service_date", "Date32")?;

        let sire_column = get_column(batch, "sire_id", &DataType::Utf8, false)?;
        let confirmation_column = get_column(batch, "confirmation_date", &DataType::Date32, false)?;
        let expected_column = get_column(batch, "expected_birth_date", &DataType::Date32, false)?;
        let actual_column = get_column(batch, "actual_birth_date", &DataType::Date32, false)?;
        let outcome_column = get_column(batch, "outcome", &DataType::Utf8, false)?;

        let sires = sire_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "sire_id", "String"))
            .transpose()?;
        let confirmations = confirmation_column
            .as_ref()
            .map(|c| downcast_array::<Date32Array>(c, "confirmation_date", "Date32"))
            .transpose()?;
        let expected = expected_column
            .as_ref()
            .map(|c| downcast_array::<Date32Array>(c, "expected_birth_date", "Date32"))
            .transpose()?;
        let actual = actual_column
            .as_ref()
            .map(|c| downcast_array::<Date32Array>(c, "actual_birth_date", "Date32"))
            .transpose()?;
        let outcomes = outcome_column
            .as_ref()
            .map(|c| downcast_array::<StringArray>(c, "outcome", "String"))
            .transpose()?;

        let mut events = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            events.push(Self {
                id: required_value(string_value(ids, row), "id", row)?,
                dam_id: required_value(string_value(dams, row), "dam_id", row)?,
                sire_id: sires.and_then(|a| string_value(a, row)),
                service_date: required_value(date_value(services, row), "service_date", row)?,
                confirmation_date: confirmations.and_then(|a| date_value(a, row)),
                expected_birth_date: expected.and_then(|a| date_value(a, row)),
                actual_birth_date: actual.and_then(|a| date_value(a, row)),
                outcome: outcomes
                    .and_then(|a| string_value(a, row))
                    .map(PregnancyOutcome::from),
            });
        }

        Ok(events)
    }

    fn to_record_batch(models: &[Self]) -> Result<RecordBatch> {
        let dates = |f: fn(&Self) -> Option<chrono::NaiveDate>| -> ArrayRef {
            Arc::new(
                models
                    .iter()
                    .map(|e| f(e).map(naive_date_to_date32))
                    .collect::<Date32Array>(),
            )
        };

        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(models.iter().map(|e| e.id.as_str()))),
            Arc::new(StringArray::from_iter_values(models.iter().map(|e| e.dam_id.as_str()))),
            Arc::new(models.iter().map(|e| e.sire_id.as_deref()).collect::<StringArray>()),
            Arc::new(Date32Array::from_iter_values(
                models.iter().map(|e| naive_date_to_date32(e.service_date)),
            )),
            dates(|e| e.confirmation_date),
            dates(|e| e.expected_birth_date),
            dates(|e| e.actual_birth_date),
            Arc::new(
                models
                    .iter()
                    .map(|e| e.outcome.as_ref().map(PregnancyOutcome::as_str))
                    .collect::<StringArray>(),
            ),
        ];

        Ok(RecordBatch::try_new(Self::schema_ref(), columns)?)
    }
}
