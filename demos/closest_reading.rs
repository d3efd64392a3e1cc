use ea_record_search::{RecordSearch, RecordSearchError};
use std::env;

fn main() -> Result<(), RecordSearchError> {
    configure_polars_display();
    let mut search = RecordSearch::new("Hemingford Grey")?;

    let station_parameters = search.fetch_station_parameters()?;
    println!("{}", serde_json::to_string_pretty(&station_parameters)?);

    for parameter in station_parameters.measures {
        println!(
            "{:<12} {:<10} {:<10} {}",
            parameter.parameter.unwrap_or_default(),
            parameter.period_name.unwrap_or_default(),
            parameter.unit_name.unwrap_or_default(),
            parameter.label.unwrap_or_default()
        );
    }

    search.configure("waterFlow").period_name("15min").call()?;
    println!("{}", search.fetched_data()?.head(Some(5)));

    let today = chrono::Local::now().date_naive().to_string();
    let closest = search
        .find_closest_record()
        .date(&today)
        .time("06:00")
        .call()?;
    println!("{:#?}", closest);

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
