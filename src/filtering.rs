use crate::error::RecordSearchError;
use crate::readings::frame::DATE_TIME_COLUMN;
use crate::types::any_datetime::AnyDateTime;
use log::debug;
use polars::prelude::{DataFrame, DataType};

pub trait ReadingsFrameExt {
    /// Row index of the reading whose `dateTime` is nearest to `target`.
    ///
    /// Distance is the absolute time difference; on a tie the earliest row wins.
    /// Rows with a null `dateTime` are skipped.
    ///
    /// # Errors
    /// * [`RecordSearchError::InvalidArgument`] if `target` cannot be resolved to an instant.
    /// * [`RecordSearchError::NotFound`] if the frame holds no timestamped readings.
    /// * [`RecordSearchError::UnexpectedData`] if a `dateTime` value cannot be parsed.
    fn closest_index(&self, target: impl AnyDateTime) -> Result<usize, RecordSearchError>;

    /// The reading nearest to `target` as a one-row frame with the original columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use ea_record_search::ReadingsFrameExt;
    /// use polars::prelude::*;
    ///
    /// let readings = df!(
    ///     "dateTime" => ["2023-07-07T11:45:00", "2023-07-07T12:00:00", "2023-07-07T12:15:00"],
    ///     "value" => [0.41, 0.43, 0.44],
    /// )
    /// .unwrap();
    ///
    /// let closest = readings.closest_record("2023-07-07T12:05:00").unwrap();
    /// assert_eq!(closest.height(), 1);
    /// assert_eq!(closest.column("value").unwrap().f64().unwrap().get(0), Some(0.43));
    /// ```
    fn closest_record(&self, target: impl AnyDateTime) -> Result<DataFrame, RecordSearchError>;
}

impl ReadingsFrameExt for DataFrame {
    fn closest_index(&self, target: impl AnyDateTime) -> Result<usize, RecordSearchError> {
        let target = target.get_datetime().ok_or_else(|| {
            RecordSearchError::InvalidArgument("target timestamp is not a valid ISO 8601 date-time".to_string())
        })?;

        let column = self.column(DATE_TIME_COLUMN).map_err(|_| {
            RecordSearchError::NotFound(format!("no '{}' column in fetched readings", DATE_TIME_COLUMN))
        })?;
        if column.dtype() != &DataType::String {
            return Err(RecordSearchError::UnexpectedData(format!(
                "'{}' column has type {}, expected strings",
                DATE_TIME_COLUMN,
                column.dtype()
            )));
        }

        // (row, |difference| in ms, signed difference in seconds)
        let mut best: Option<(usize, i64, i64)> = None;
        for (row, value) in column.str()?.into_iter().enumerate() {
            let Some(value) = value else { continue };
            let timestamp = value.get_datetime().ok_or_else(|| {
                RecordSearchError::UnexpectedData(format!(
                    "unparseable {} '{}' at row {}",
                    DATE_TIME_COLUMN, value, row
                ))
            })?;
            let difference = timestamp - target;
            let distance = difference.num_milliseconds().abs();
            if best.map_or(true, |(_, best_distance, _)| distance < best_distance) {
                best = Some((row, distance, difference.num_seconds()));
            }
        }

        let (row, _, signed_seconds) = best.ok_or_else(|| {
            RecordSearchError::NotFound("no timestamped readings to search".to_string())
        })?;
        debug!(
            "Time difference to closest record: {:.2} minutes",
            signed_seconds as f64 / 60.0
        );
        Ok(row)
    }

    fn closest_record(&self, target: impl AnyDateTime) -> Result<DataFrame, RecordSearchError> {
        let row = self.closest_index(target)?;
        Ok(self.slice(row as i64, 1))
    }
}
