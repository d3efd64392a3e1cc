use crate::config::ClientConfig;
use crate::error::RecordSearchError;
use crate::transport::{get_items, HttpTransport};
use crate::types::station::MeasureParameter;
use polars::prelude::*;

const MEASURES_PATH: &str = "id/measures";

/// Lists the measures published for the given station notations.
///
/// Each notation is sent as its own `station` query pair.
pub(crate) fn fetch_measures(
    transport: &dyn HttpTransport,
    config: &ClientConfig,
    notations: &[String],
) -> Result<Vec<MeasureParameter>, RecordSearchError> {
    let query: Vec<(String, String)> = notations
        .iter()
        .map(|notation| ("station".to_string(), notation.clone()))
        .collect();
    get_items(transport, &config.endpoint(MEASURES_PATH), &query)
}

/// Lays station parameters out as a table with the columns
/// `parameter`, `unitName`, `periodName`, `valueType` and `label`.
///
/// # Examples
///
/// ```
/// use ea_record_search::{parameters_frame, MeasureParameter};
///
/// let params = vec![MeasureParameter {
///     parameter: Some("flow".to_string()),
///     unit_name: Some("m3/s".to_string()),
///     period_name: Some("15min".to_string()),
///     value_type: Some("instantaneous".to_string()),
///     label: Some("Flow".to_string()),
/// }];
/// let frame = parameters_frame(&params).unwrap();
/// assert_eq!(frame.shape(), (1, 5));
/// ```
pub fn parameters_frame(parameters: &[MeasureParameter]) -> Result<DataFrame, RecordSearchError> {
    let frame = df!(
        "parameter" => parameters.iter().map(|p| p.parameter.clone()).collect::<Vec<_>>(),
        "unitName" => parameters.iter().map(|p| p.unit_name.clone()).collect::<Vec<_>>(),
        "periodName" => parameters.iter().map(|p| p.period_name.clone()).collect::<Vec<_>>(),
        "valueType" => parameters.iter().map(|p| p.value_type.clone()).collect::<Vec<_>>(),
        "label" => parameters.iter().map(|p| p.label.clone()).collect::<Vec<_>>(),
    )?;
    Ok(frame)
}
