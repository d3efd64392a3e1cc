mod clock;
mod config;
mod error;
mod filtering;
mod readings;
mod record_search;
mod stations;
mod transport;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::RecordSearchError;
pub use filtering::ReadingsFrameExt;
pub use readings::frame::DATE_TIME_COLUMN;
pub use record_search::*;
pub use stations::measures::parameters_frame;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

pub use types::any_datetime::AnyDateTime;
pub use types::observed_property::ObservedProperty;
pub use types::period_name::PeriodName;
pub use types::search_parameters::{DateWindow, SearchParameters, StationIdentifier};
pub use types::station::{MeasureParameter, StationItem, StationParameters};
