//! The main entry point: a client bound to one hydrology station name that
//! resolves the station's identifiers, fetches readings and answers
//! point-in-time queries against them.

use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::error::RecordSearchError;
use crate::filtering::ReadingsFrameExt;
use crate::readings::loader::fetch_readings;
use crate::stations::measures::fetch_measures;
use crate::stations::resolve::{resolve_identifier, resolve_search_notations};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::observed_property::ObservedProperty;
use crate::types::period_name::PeriodName;
use crate::types::search_parameters::{DateWindow, SearchParameters, StationIdentifier};
use crate::types::station::StationParameters;
use bon::bon;
use chrono::{Months, NaiveDate};
use log::{info, warn};
use polars::prelude::DataFrame;

/// Readings fetched by the last successful `configure`, together with the
/// parameters that produced them.
struct FetchedRecords {
    parameters: SearchParameters,
    data: DataFrame,
}

/// Client for the readings of a single station, looked up by name.
///
/// The typical flow is:
/// 1. [`RecordSearch::new`] with the station's human-readable name.
/// 2. [`RecordSearch::configure`] with an observed property and optional
///    period and date bounds. This resolves the station identifier and
///    fetches the readings, blocking until both requests complete.
/// 3. [`RecordSearch::fetched_data`] or [`RecordSearch::find_closest_record`].
///
/// A failed `configure` leaves the previous configuration and readings in
/// place; nothing is updated until resolution and fetch have both succeeded.
///
/// Station names are not unique. When the search returns several stations
/// the first one is used.
///
/// The client performs blocking I/O and is not meant to be shared between
/// threads without external synchronisation.
///
/// # Examples
///
/// ```no_run
/// use ea_record_search::{RecordSearch, RecordSearchError};
///
/// # fn main() -> Result<(), RecordSearchError> {
/// let mut search = RecordSearch::new("Hemingford Grey")?;
/// search
///     .configure("waterFlow")
///     .period_name("daily")
///     .min_date("2023-01-01")
///     .max_date("2023-01-31")
///     .call()?;
///
/// let record = search
///     .find_closest_record()
///     .date("2023-01-15")
///     .time("09:00")
///     .call()?;
/// println!("{}", record);
/// # Ok(())
/// # }
/// ```
pub struct RecordSearch {
    station_name: String,
    config: ClientConfig,
    transport: Box<dyn HttpTransport>,
    clock: Box<dyn Clock>,
    fetched: Option<FetchedRecords>,
}

#[bon]
impl RecordSearch {
    /// Creates a client for `station_name` against the public hydrology API.
    ///
    /// # Errors
    ///
    /// Returns [`RecordSearchError::ClientBuild`] if the HTTP client cannot be initialised.
    pub fn new(station_name: impl Into<String>) -> Result<Self, RecordSearchError> {
        Self::with_config(station_name, ClientConfig::default())
    }

    /// Creates a client with custom HTTP settings, e.g. another base URL or timeout.
    pub fn with_config(
        station_name: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, RecordSearchError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_parts(station_name, config, transport, SystemClock))
    }

    /// Creates a client from explicit parts. The transport performs every
    /// request and the clock supplies "today" for default date bounds.
    pub fn with_parts(
        station_name: impl Into<String>,
        config: ClientConfig,
        transport: impl HttpTransport + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            station_name: station_name.into(),
            config,
            transport: Box::new(transport),
            clock: Box::new(clock),
            fetched: None,
        }
    }

    /// Sets the search parameters, resolves the station identifier and fetches readings.
    ///
    /// This method uses a builder pattern; finish with `.call()`.
    ///
    /// # Arguments
    ///
    /// * `observed_property` - **Required**, the start of the builder. One of
    ///   `waterFlow`, `waterLevel`, `rainfall`, `groundwaterLevel`,
    ///   `dissolved-oxygen`, `fdom`, `bga`, `turbidity`, `chlorophyll`,
    ///   `conductivity`, `temperature`, `ammonium`, `nitrate`, `ph`.
    /// * `.period_name(&str)` - Optional, `15min` (default), `daily` or
    ///   `sub-daily`. Always `sub-daily` for water-quality properties.
    /// * `.min_date(&str)` - Optional `yyyy-mm-dd`. Defaults to six calendar months before today.
    /// * `.max_date(&str)` - Optional `yyyy-mm-dd`. Defaults to today.
    ///
    /// # Errors
    ///
    /// * [`RecordSearchError::InvalidArgument`] for an unknown property or period, or a malformed date.
    /// * [`RecordSearchError::NotFound`] if no station matches the name and property.
    /// * [`RecordSearchError::RemoteError`] if either request gets a non-200 response.
    /// * [`RecordSearchError::NetworkRequest`] or [`RecordSearchError::JsonParse`] on transport or decoding failures.
    #[builder]
    pub fn configure(
        &mut self,
        #[builder(start_fn)] observed_property: &str,
        period_name: Option<&str>,
        min_date: Option<&str>,
        max_date: Option<&str>,
    ) -> Result<(), RecordSearchError> {
        let observed_property: ObservedProperty = observed_property.parse()?;
        let requested_period = match period_name {
            Some(period) => period.parse()?,
            None => PeriodName::default(),
        };
        let period_name = if observed_property.is_water_quality() {
            PeriodName::SubDaily
        } else {
            requested_period
        };
        let window = self.resolve_window(min_date, max_date)?;

        let station_identifier = resolve_identifier(
            self.transport.as_ref(),
            &self.config,
            &self.station_name,
            observed_property,
        )?;
        let parameters = SearchParameters {
            observed_property,
            period_name,
            window,
            station_identifier,
        };
        let data = fetch_readings(self.transport.as_ref(), &self.config, &parameters)?;

        self.fetched = Some(FetchedRecords { parameters, data });
        Ok(())
    }

    /// Lists the measures available at the station, independent of any configured property.
    ///
    /// Searches by name only, then queries the measures of every matching notation.
    /// The notations are returned alongside the measures.
    ///
    /// # Errors
    ///
    /// * [`RecordSearchError::NotFound`] if the name search yields no notation.
    /// * [`RecordSearchError::RemoteError`] if either request gets a non-200 response.
    pub fn fetch_station_parameters(&self) -> Result<StationParameters, RecordSearchError> {
        let notations =
            resolve_search_notations(self.transport.as_ref(), &self.config, &self.station_name)?;
        let measures = fetch_measures(self.transport.as_ref(), &self.config, &notations)?;
        Ok(StationParameters {
            notations,
            measures,
        })
    }

    /// The readings fetched by the last successful [`RecordSearch::configure`].
    ///
    /// # Errors
    ///
    /// [`RecordSearchError::PreconditionFailed`] if nothing has been fetched yet.
    pub fn fetched_data(&self) -> Result<&DataFrame, RecordSearchError> {
        self.fetched
            .as_ref()
            .map(|fetched| &fetched.data)
            .ok_or_else(not_fetched)
    }

    /// Finds the fetched reading closest in time to a target timestamp.
    ///
    /// Give either `.date_time("2023-07-07T12:00:00")`, or both `.date("2023-07-07")`
    /// and `.time("12:00")` which are joined as `date + "T" + time`. When
    /// `date_time` is set it takes precedence. Finish with `.call()`.
    ///
    /// Returns a one-row frame with the same columns as [`RecordSearch::fetched_data`].
    /// When two readings are equally close, the earlier row wins.
    ///
    /// # Errors
    ///
    /// * [`RecordSearchError::PreconditionFailed`] if nothing has been fetched yet.
    /// * [`RecordSearchError::InvalidArgument`] if neither form is given or the timestamp is malformed.
    /// * [`RecordSearchError::NotFound`] if the fetched data holds no readings.
    #[builder]
    pub fn find_closest_record(
        &self,
        date: Option<&str>,
        time: Option<&str>,
        date_time: Option<&str>,
    ) -> Result<DataFrame, RecordSearchError> {
        let data = self.fetched_data()?;
        let target = match (date_time, date, time) {
            (Some(date_time), _, _) => date_time.to_string(),
            (None, Some(date), Some(time)) => format!("{}T{}", date, time),
            _ => {
                return Err(RecordSearchError::InvalidArgument(
                    "Provide either date and time or date_time".to_string(),
                ))
            }
        };
        data.closest_record(target.as_str())
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    /// Parameters resolved by the last successful `configure`.
    pub fn parameters(&self) -> Option<&SearchParameters> {
        self.fetched.as_ref().map(|fetched| &fetched.parameters)
    }

    pub fn observed_property(&self) -> Option<ObservedProperty> {
        self.parameters().map(|p| p.observed_property)
    }

    /// Effective period of the current configuration.
    pub fn period_name(&self) -> Option<PeriodName> {
        self.parameters().map(|p| p.period_name)
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.parameters().map(|p| p.window.min_date)
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.parameters().map(|p| p.window.max_date)
    }

    pub fn is_water_quality_station(&self) -> Option<bool> {
        self.parameters().map(SearchParameters::is_water_quality_station)
    }

    pub fn station_wiski_id(&self) -> Option<&str> {
        match self.parameters().map(|p| &p.station_identifier) {
            Some(StationIdentifier::WiskiId(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn station_notation(&self) -> Option<&str> {
        match self.parameters().map(|p| &p.station_identifier) {
            Some(StationIdentifier::Notation(notation)) => Some(notation.as_str()),
            _ => None,
        }
    }

    fn resolve_window(
        &self,
        min_date: Option<&str>,
        max_date: Option<&str>,
    ) -> Result<DateWindow, RecordSearchError> {
        let today = self.clock.today();

        let min_date = match min_date {
            Some(date) => parse_date("min_date", date)?,
            None => {
                let date = six_months_before(today)?;
                info!("Min date set as: {}", date.format(DateWindow::DATE_FORMAT));
                date
            }
        };
        let max_date = match max_date {
            Some(date) => parse_date("max_date", date)?,
            None => {
                info!("Max date set as: {} (today)", today.format(DateWindow::DATE_FORMAT));
                today
            }
        };
        if min_date > max_date {
            warn!(
                "min_date {} is after max_date {}; the API will return no readings",
                min_date, max_date
            );
        }
        Ok(DateWindow { min_date, max_date })
    }
}

fn not_fetched() -> RecordSearchError {
    RecordSearchError::PreconditionFailed("Data was not fetched, call configure() first".to_string())
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, RecordSearchError> {
    NaiveDate::parse_from_str(value, DateWindow::DATE_FORMAT).map_err(|_| {
        RecordSearchError::InvalidArgument(format!(
            "{} \"{}\" is not a yyyy-mm-dd date",
            field, value
        ))
    })
}

/// Same day six calendar months earlier, clamped to the end of shorter months.
fn six_months_before(today: NaiveDate) -> Result<NaiveDate, RecordSearchError> {
    today.checked_sub_months(Months::new(6)).ok_or_else(|| {
        RecordSearchError::UnexpectedData(format!("cannot go six months back from {}", today))
    })
}
