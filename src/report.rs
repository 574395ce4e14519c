/*!
 * Reporting functionality for CtxCat
 *
 * Renders a post-run summary of the scan using the tabled library.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::filter::Verdict;
use crate::utils::format_file_size;

/// Statistics for one run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Output file path, when file output was requested
    pub output_file: Option<String>,
    /// Bytes written to the output file
    pub output_size: Option<u64>,
    /// Clipboard outcome: `None` when not requested, otherwise success
    pub clipboard: Option<bool>,
    /// Total wall time of the run
    pub duration: Duration,
    /// Candidate files discovered before filtering
    pub candidates: usize,
    /// Files that survived the filter chain
    pub included: usize,
    /// Exclusion counts by reason
    pub exclusions: HashMap<Verdict, usize>,
    /// Included files dropped by the document section cap
    pub files_omitted: usize,
    /// Files whose content was replaced by an error marker
    pub read_errors: usize,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string from run statistics
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn generate_console_report(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        if let Some(path) = &report.output_file {
            rows.push(SummaryRow {
                key: "📂 Output File".to_string(),
                value: path.clone(),
            });
        }

        if let Some(size) = report.output_size {
            rows.push(SummaryRow {
                key: "📦 Output Size".to_string(),
                value: format_file_size(size),
            });
        }

        if let Some(copied) = report.clipboard {
            rows.push(SummaryRow {
                key: "📋 Clipboard".to_string(),
                value: if copied {
                    "copied".to_string()
                } else {
                    "failed".to_string()
                },
            });
        }

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "🔍 Candidate Files".to_string(),
            value: report.candidates.to_string(),
        });

        rows.push(SummaryRow {
            key: "📄 Files Included".to_string(),
            value: report.included.to_string(),
        });

        // Exclusion breakdown in filter-chain order
        for verdict in [
            Verdict::Gitignored,
            Verdict::IgnoredExtension,
            Verdict::IgnoredPattern,
            Verdict::TooLarge,
            Verdict::NonText,
        ] {
            if let Some(count) = report.exclusions.get(&verdict) {
                if *count > 0 {
                    rows.push(SummaryRow {
                        key: format!("🚫 Excluded ({})", verdict.label()),
                        value: count.to_string(),
                    });
                }
            }
        }

        if report.files_omitted > 0 {
            rows.push(SummaryRow {
                key: "✂️ Omitted (file cap)".to_string(),
                value: report.files_omitted.to_string(),
            });
        }

        if report.read_errors > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Read Errors".to_string(),
                value: report.read_errors.to_string(),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("✅  CONTEXT GENERATED\n{}", table)
    }
}
