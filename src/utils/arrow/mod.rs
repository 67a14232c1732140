//! Arrow helpers for registry record batches.

pub mod array_utils;

pub use array_utils::{
    date32_to_naive_date, date_value, downcast_array, get_column, naive_date_to_date32,
    string_value,
};
