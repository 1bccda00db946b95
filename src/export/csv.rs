use crate::models::log_row::LogRow;
use csv::Writer;

/// Write the fetched log rows as CSV, one record per entry.
pub fn write_csv(path: &str, rows: &[LogRow]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["Date", "StartTime", "EndTime", "Location", "Duration", "Notes"])?;

    for row in rows {
        wtr.write_record(&[
            row.date.clone().unwrap_or_default(),
            row.start_time.clone().unwrap_or_default(),
            row.end_time.clone().unwrap_or_default(),
            row.location.clone().unwrap_or_default(),
            row.duration.clone().unwrap_or_default(),
            row.notes.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
