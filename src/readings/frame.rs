//! Turns the JSON `items` of a readings response into a polars `DataFrame`.
//!
//! Nested objects are flattened into dotted column names, so
//! `{"measure": {"@id": "..."}}` becomes a `measure.@id` column. Columns
//! appear in the order their keys are first seen. A column whose non-null
//! values are all numbers becomes `Float64`, all booleans `Boolean`, and
//! anything else `String`.
//! A column with no non-null values at all is `String`.

use crate::error::RecordSearchError;
use polars::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Column holding each reading's timestamp.
pub const DATE_TIME_COLUMN: &str = "dateTime";

pub(crate) fn items_to_frame(items: &[Value]) -> Result<DataFrame, RecordSearchError> {
    let mut column_names: Vec<String> = Vec::new();
    let mut column_index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<HashMap<usize, Value>> = Vec::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            return Err(RecordSearchError::UnexpectedData(format!(
                "reading item {} is not a JSON object",
                position
            )));
        };
        let mut flat = Vec::new();
        flatten_object("", object, &mut flat);

        let mut row = HashMap::with_capacity(flat.len());
        for (key, value) in flat {
            let index = *column_index.entry(key.clone()).or_insert_with(|| {
                column_names.push(key);
                column_names.len() - 1
            });
            row.insert(index, value);
        }
        rows.push(row);
    }

    let columns = column_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values: Vec<Option<&Value>> = rows
                .iter()
                .map(|row| row.get(&index).filter(|v| !v.is_null()))
                .collect();
            build_column(name, &values)
        })
        .collect::<Vec<Column>>();

    Ok(DataFrame::new(columns)?)
}

fn flatten_object(prefix: &str, object: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, value) in object {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) => flatten_object(&name, inner, out),
            other => out.push((name, other.clone())),
        }
    }
}

fn build_column(name: &str, values: &[Option<&Value>]) -> Column {
    let present = || values.iter().flatten();

    // Nothing to infer from, keep the nulls untyped as strings.
    if present().next().is_none() {
        return Column::new(name.into(), vec![None::<String>; values.len()]);
    }
    if present().all(|v| v.is_number()) {
        let data: Vec<Option<f64>> = values.iter().map(|v| v.and_then(Value::as_f64)).collect();
        return Column::new(name.into(), data);
    }
    if present().all(|v| v.is_boolean()) {
        let data: Vec<Option<bool>> = values.iter().map(|v| v.and_then(Value::as_bool)).collect();
        return Column::new(name.into(), data);
    }
    let data: Vec<Option<String>> = values
        .iter()
        .map(|v| {
            v.map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
        })
        .collect();
    Column::new(name.into(), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_into_dotted_columns() {
        let items = vec![
            json!({"measure": {"@id": "http://m/1"}, "date": "2023-01-01", "dateTime": "2023-01-01T00:00:00", "value": 1.5, "quality": "Good"}),
            json!({"measure": {"@id": "http://m/1"}, "date": "2023-01-01", "dateTime": "2023-01-01T00:15:00", "value": 2, "quality": "Good"}),
        ];
        let frame = items_to_frame(&items).unwrap();
        assert_eq!(
            frame.get_column_names(),
            ["measure.@id", "date", "dateTime", "value", "quality"]
        );
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.column("value").unwrap().dtype(), &DataType::Float64);
        assert_eq!(frame.column("dateTime").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn missing_keys_become_nulls_and_late_keys_append_columns() {
        let items = vec![
            json!({"dateTime": "2023-01-01T00:00:00", "value": 1.0}),
            json!({"dateTime": "2023-01-01T00:15:00", "completeness": "Complete"}),
        ];
        let frame = items_to_frame(&items).unwrap();
        assert_eq!(frame.get_column_names(), ["dateTime", "value", "completeness"]);
        assert_eq!(frame.column("value").unwrap().null_count(), 1);
        assert_eq!(frame.column("completeness").unwrap().null_count(), 1);
    }

    #[test]
    fn mixed_value_types_fall_back_to_strings() {
        let items = vec![json!({"value": 1.0}), json!({"value": "n/a"}), json!({"valid": true})];
        let frame = items_to_frame(&items).unwrap();
        let value = frame.column("value").unwrap().str().unwrap();
        assert_eq!(value.get(0), Some("1.0"));
        assert_eq!(value.get(1), Some("n/a"));
        assert_eq!(frame.column("valid").unwrap().dtype(), &DataType::Boolean);
    }

    #[test]
    fn all_null_column_is_a_string_column() {
        let items = vec![
            json!({"dateTime": null, "value": 1.0}),
            json!({"dateTime": null, "value": 2.0}),
        ];
        let frame = items_to_frame(&items).unwrap();
        let date_time = frame.column("dateTime").unwrap();
        assert_eq!(date_time.dtype(), &DataType::String);
        assert_eq!(date_time.null_count(), 2);
    }

    #[test]
    fn no_items_gives_an_empty_frame() {
        let frame = items_to_frame(&[]).unwrap();
        assert_eq!(frame.shape(), (0, 0));
    }

    #[test]
    fn non_object_item_is_rejected() {
        let err = items_to_frame(&[json!(42)]).unwrap_err();
        assert!(matches!(err, RecordSearchError::UnexpectedData(_)));
    }
}
