//! Run summary aggregation.

use serde::Serialize;

use super::engine::FileReport;

/// Totals across all files of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_checked: usize,
    pub files_with_errors: usize,
    pub total_errors: usize,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.total_errors == 0
    }

    /// Fold one more file into the totals
    pub fn add(&mut self, report: &FileReport) {
        self.files_checked += 1;
        if report.error_count > 0 {
            self.files_with_errors += 1;
            self.total_errors += report.error_count;
        }
    }
}

/// Summarize a set of file reports
pub fn summarize<'a, I>(reports: I) -> RunSummary
where
    I: IntoIterator<Item = &'a FileReport>,
{
    reports
        .into_iter()
        .fold(RunSummary::default(), |mut summary, report| {
            summary.add(report);
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileAccessError;
    use crate::validation::engine::validate_lines;

    #[test]
    fn test_summary_counts() {
        let reports = vec![
            validate_lines("a.txt", ["-10.1 26.4", "6.4", " 6.8"]),
            validate_lines("b.txt", ["", "6.4"]),
            validate_lines("c.txt", ["abc", "6.4 7.8 9.0"]),
            FileReport::unreadable("d.txt", FileAccessError::Decode { valid_up_to: 0 }),
        ];

        let summary = summarize(&reports);
        assert_eq!(
            summary,
            RunSummary {
                files_checked: 4,
                files_with_errors: 3,
                total_errors: 4,
            }
        );
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_order_does_not_change_counts() {
        let mut reports = vec![
            validate_lines("b.txt", ["", "6.4"]),
            validate_lines("a.txt", ["1 2"]),
            validate_lines("c.txt", ["x", "y", "3"]),
        ];
        let forward = summarize(&reports);
        reports.reverse();
        assert_eq!(forward, summarize(&reports));
    }

    #[test]
    fn test_empty_run_is_clean() {
        let summary = summarize(Vec::<FileReport>::new().iter());
        assert_eq!(summary, RunSummary::default());
        assert!(summary.is_clean());
    }
}
