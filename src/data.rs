//! Data loading functionality for opsmodels.
//!
//! Demand history can be supplied on the command line as comma-separated
//! text or, for longer series, as a CSV file with `year` and `sales`
//! columns. This module handles the file case.

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::{DemandRow, DemandSeries};

/// Reads a demand series from any CSV source.
///
/// Rows keep their file order. Column names are matched after trimming, so
/// `year, sales` and `year,sales` headers both work.
pub fn read_demand_history<R: Read>(reader: R) -> Result<DemandSeries, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut series = DemandSeries {
        years: Vec::new(),
        sales: Vec::new(),
    };
    for result in rdr.deserialize() {
        let row: DemandRow = result?;
        series.years.push(row.year);
        series.sales.push(row.sales);
    }
    Ok(series)
}

/// Loads demand history from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Returns
///
/// The parsed [`DemandSeries`], or an error if the file cannot be read or a
/// row does not hold two integers.
///
/// # CSV Format
///
/// Expected columns: `year, sales`
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use opsmodels::data::load_demand_history;
///
/// let series = load_demand_history(Path::new("history.csv")).unwrap();
/// println!("Loaded {} years", series.years.len());
/// ```
pub fn load_demand_history(path: &Path) -> Result<DemandSeries, Box<dyn Error>> {
    let file = File::open(path)?;
    read_demand_history(file)
}
