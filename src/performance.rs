use std::collections::BTreeMap;

use crate::{
    record::Record,
    report::{Report, SummaryRow},
};

/// Average performance score by position.
///
/// Produces one row per distinct position, with keys `position` and
/// `avg_performance`. Averages are rounded to 2 decimal places (halves away
/// from zero), and rows are sorted by average, descending. Positions with
/// identical averages are sorted alphabetically.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerformanceReport;

#[derive(Default)]
struct Tally {
    sum: f64,
    count: u32,
}

impl Report for PerformanceReport {
    fn generate(&self, records: &[Record]) -> Vec<SummaryRow> {
        let mut positions: BTreeMap<&str, Tally> = BTreeMap::new();
        for record in records {
            let tally = positions.entry(record.position.as_str()).or_default();
            tally.sum += record.performance;
            tally.count += 1;
        }
        let mut averages: Vec<_> = positions
            .into_iter()
            .map(|(position, tally)| (position, round2(tally.sum / f64::from(tally.count))))
            .collect();
        averages.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        averages
            .into_iter()
            .map(|(position, avg)| {
                SummaryRow::new()
                    .with("position", position)
                    .with("avg_performance", avg)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "performance"
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(position: &str, performance: f64) -> Record {
        Record {
            name: format!("{position} employee"),
            position: position.into(),
            completed_tasks: 10,
            performance,
            skills: ["Python"].into_iter().collect(),
            team: "Team".into(),
            experience_years: 1,
        }
    }

    fn summary(rows: &[SummaryRow]) -> Vec<(&str, f64)> {
        rows.iter()
            .map(|row| {
                (
                    row.get("position").unwrap().as_str().unwrap(),
                    row.get("avg_performance").unwrap().as_f64().unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn generate_fn_averages_by_position_sorted_descending() {
        let records = vec![
            employee("Backend Developer", 4.8),
            employee("Frontend Developer", 4.7),
            employee("Data Scientist", 4.6),
            employee("Backend Developer", 4.9),
        ];
        let rows = PerformanceReport.generate(&records);
        assert_eq!(
            summary(&rows),
            vec![
                ("Backend Developer", 4.85),
                ("Frontend Developer", 4.7),
                ("Data Scientist", 4.6),
            ]
        );
    }

    #[test]
    fn generate_fn_gives_position_and_avg_performance_keys() {
        let rows = PerformanceReport.generate(&[employee("QA", 4.0)]);
        assert_eq!(
            rows[0].keys().collect::<Vec<_>>(),
            ["position", "avg_performance"]
        );
    }

    #[test]
    fn generate_fn_returns_empty_for_no_records() {
        assert!(PerformanceReport.generate(&[]).is_empty());
    }

    #[test]
    fn generate_fn_rounds_single_record_groups() {
        let rows = PerformanceReport.generate(&[employee("QA", 4.236)]);
        assert_eq!(summary(&rows), vec![("QA", 4.24)]);
    }

    #[test]
    fn generate_fn_rounds_long_averages_to_two_places() {
        let rows = PerformanceReport.generate(&[
            employee("QA", 4.0),
            employee("QA", 4.0),
            employee("QA", 5.0),
        ]);
        assert_eq!(summary(&rows), vec![("QA", 4.33)]);
    }

    #[test]
    fn generate_fn_treats_positions_case_and_whitespace_sensitively() {
        let rows = PerformanceReport.generate(&[
            employee("QA", 4.0),
            employee("qa", 3.0),
            employee("QA ", 2.0),
        ]);
        assert_eq!(summary(&rows), vec![("QA", 4.0), ("qa", 3.0), ("QA ", 2.0)]);
    }

    #[test]
    fn generate_fn_sorts_tied_positions_alphabetically() {
        let rows = PerformanceReport.generate(&[
            employee("Tester", 4.5),
            employee("Analyst", 4.5),
            employee("Manager", 4.9),
        ]);
        assert_eq!(
            summary(&rows),
            vec![("Manager", 4.9), ("Analyst", 4.5), ("Tester", 4.5)]
        );
    }

    #[test]
    fn generate_fn_does_not_clamp_performance_scale() {
        let rows = PerformanceReport.generate(&[employee("Lead", 87.5), employee("Intern", -1.0)]);
        assert_eq!(summary(&rows), vec![("Lead", 87.5), ("Intern", -1.0)]);
    }

    #[test]
    fn generate_fn_leaves_input_unchanged() {
        let records = vec![employee("B", 1.0), employee("A", 2.0)];
        let before = records.clone();
        PerformanceReport.generate(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn name_fn_returns_performance() {
        assert_eq!(PerformanceReport.name(), "performance");
    }
}
