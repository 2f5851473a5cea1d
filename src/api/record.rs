use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// One row of chart input, keyed by field name in source order.
pub type DataRecord = IndexMap<String, Value>;

/// Numeric value of `key`, or `None` when absent, null or not a number.
#[must_use]
pub fn record_value(record: &DataRecord, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// Parses a JSON array of objects into records.
pub fn records_from_json(input: &str) -> ChartResult<Vec<DataRecord>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse data records: {e}")))
}
