//! CSV export of the projection table

use super::ExportError;
use crate::projection::SimulationResult;
use log::info;
use std::io::Write;
use std::path::Path;

/// Column headers, in export order
pub const CSV_HEADERS: [&str; 5] = ["Year", "Employment", "Emissions", "Water Use", "Health Index"];

/// Suggested file name when the table is offered for download
pub const EXPORT_FILE_NAME: &str = "environment_simulation.csv";

/// Write the full table as CSV, one row per year, at full precision
pub fn write_csv<W: Write>(writer: W, result: &SimulationResult) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;

    for r in result {
        wtr.write_record(&[
            r.year.to_string(),
            r.employment.to_string(),
            r.emissions.to_string(),
            r.water_use.to_string(),
            r.health_index.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the table to an in-memory CSV buffer
pub fn csv_bytes(result: &SimulationResult) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, result)?;
    Ok(buffer)
}

/// Export the table to a CSV file, replacing any existing file
pub fn write_csv_file<P: AsRef<Path>>(path: P, result: &SimulationResult) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv(file, result)?;
    info!("Exported {} rows to {}", result.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::projection::project;

    fn two_year_result() -> SimulationResult {
        project(&SimulationConfig {
            time_steps: 2,
            ..Default::default()
        })
    }

    #[test]
    fn test_csv_layout() {
        let bytes = csv_bytes(&two_year_result()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Year,Employment,Emissions,Water Use,Health Index");
        assert_eq!(lines[1], "1,1000,80,50,76");
        assert!(lines[2].starts_with("2,1050,"));
    }

    #[test]
    fn test_csv_reads_back() {
        let result = two_year_result();
        let bytes = csv_bytes(&result).unwrap();
        let mut rdr = csv::Reader::from_reader(bytes.as_slice());

        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS);

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), result.len());
        let water: f64 = rows[1][3].parse().unwrap();
        assert_eq!(water, result.records()[1].water_use);
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        write_csv_file(&path, &two_year_result()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_empty_result_exports_header_only() {
        let result = project(&SimulationConfig {
            time_steps: 0,
            ..Default::default()
        });
        let text = String::from_utf8(csv_bytes(&result).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
