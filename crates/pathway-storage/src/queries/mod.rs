//! SQL for each table group. Functions take a `&Connection` so they work
//! on either a plain connection or a transaction.

pub mod catalog_ops;
pub mod diagnostic_ops;
pub mod path_ops;
pub mod profile_ops;
pub mod step_ops;

use chrono::{DateTime, Utc};

use pathway_core::errors::PathwayResult;

use crate::to_storage_err;

pub(crate) fn parse_ts(value: &str) -> PathwayResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {value:?}: {e}")))
}

pub(crate) fn parse_opt_ts(value: Option<String>) -> PathwayResult<Option<DateTime<Utc>>> {
    value.as_deref().map(parse_ts).transpose()
}

pub(crate) fn parse_enum<T: std::str::FromStr<Err = String>>(value: &str) -> PathwayResult<T> {
    value.parse::<T>().map_err(to_storage_err)
}
