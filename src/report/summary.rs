//! Final-year summary and plain-text tables

use crate::projection::{SimulationResult, YearRecord};
use serde::Serialize;
use std::fmt;

/// Headline figures for a completed projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub years: u32,
    pub final_year: YearRecord,
    pub peak_employment: f64,
    pub cumulative_emissions: f64,
    pub cumulative_water_use: f64,
    /// First year the health index reached zero, if it did
    pub first_year_health_floored: Option<u32>,
}

impl Summary {
    /// Summarize a projection; `None` when no years were projected
    pub fn from_result(result: &SimulationResult) -> Option<Self> {
        let final_year = *result.final_year()?;

        let mut peak_employment = f64::MIN;
        let mut cumulative_emissions = 0.0;
        let mut cumulative_water_use = 0.0;
        let mut first_year_health_floored = None;

        for record in result {
            peak_employment = peak_employment.max(record.employment);
            cumulative_emissions += record.emissions;
            cumulative_water_use += record.water_use;
            if first_year_health_floored.is_none() && record.is_health_floored() {
                first_year_health_floored = Some(record.year);
            }
        }

        Some(Self {
            years: result.len() as u32,
            final_year,
            peak_employment,
            cumulative_emissions,
            cumulative_water_use,
            first_year_health_floored,
        })
    }

    /// Final year as metric/value pairs, in table column order
    pub fn final_year_rows(&self) -> [(&'static str, f64); 5] {
        let r = &self.final_year;
        [
            ("Year", f64::from(r.year)),
            ("Employment", r.employment),
            ("Emissions", r.emissions),
            ("Water Use", r.water_use),
            ("Health Index", r.health_index),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Year Summary")?;
        for (metric, value) in self.final_year_rows() {
            writeln!(f, "  {:<14} {:>16.2}", metric, value)?;
        }
        writeln!(f, "  {:<14} {:>16.2}", "Peak Jobs", self.peak_employment)?;
        writeln!(f, "  {:<14} {:>16.2}", "Total Emis.", self.cumulative_emissions)?;
        writeln!(f, "  {:<14} {:>16.2}", "Total Water", self.cumulative_water_use)?;
        match self.first_year_health_floored {
            Some(year) => writeln!(f, "  Health index reached 0 in year {}", year),
            None => writeln!(f, "  Health index stayed above 0"),
        }
    }
}

/// Render the full projection as a fixed-width text table
pub fn render_table(result: &SimulationResult) -> String {
    let mut out = format!(
        "{:>5} | {:>14} | {:>12} | {:>12} | {:>12}\n",
        "Year", "Employment", "Emissions", "Water Use", "Health Index"
    );
    for r in result {
        out.push_str(&format!(
            "{:5} | {:14.2} | {:12.2} | {:12.2} | {:12.2}\n",
            r.year, r.employment, r.emissions, r.water_use, r.health_index
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_matches_final_record() {
        let config = SimulationConfig::default();
        let result = project(&config);
        let summary = Summary::from_result(&result).unwrap();

        assert_eq!(summary.years, 20);
        assert_eq!(&summary.final_year, result.final_year().unwrap());
        // Employment only grows, so the peak is the last year
        assert_eq!(summary.peak_employment, summary.final_year.employment);

        let total: f64 = result.iter().map(|r| r.emissions).sum();
        assert_relative_eq!(summary.cumulative_emissions, total, epsilon = 1e-9);
    }

    #[test]
    fn test_first_floored_year() {
        // Emissions 80 * 1.2^(n-1) reach 100 / 0.5 = 200 in year 7 (80 * 1.2^6 = 238.9)
        let config = SimulationConfig {
            time_steps: 10,
            growth_rate: 0.20,
            health_impact: 0.5,
            ..Default::default()
        };
        let summary = Summary::from_result(&project(&config)).unwrap();
        assert_eq!(summary.first_year_health_floored, Some(7));
    }

    #[test]
    fn test_health_never_floored() {
        let summary = Summary::from_result(&project(&SimulationConfig::default())).unwrap();
        assert_eq!(summary.first_year_health_floored, None);
        assert!(summary.to_string().contains("stayed above 0"));
    }

    #[test]
    fn test_render_table_has_row_per_year() {
        let config = SimulationConfig {
            time_steps: 5,
            ..Default::default()
        };
        let table = render_table(&project(&config));
        assert_eq!(table.lines().count(), 6);
        assert!(table.lines().next().unwrap().contains("Health Index"));
    }
}
