//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::compare::{Comparison, ComparisonRow};
use crate::statistics::MeasurementSummary;
use crate::types::StatisticKind;

/// Statistic kinds shown by default: the raw and normalized averages.
pub const DEFAULT_KINDS: [StatisticKind; 2] =
    [StatisticKind::Average, StatisticKind::NormalizedAverage];

/// Format a comparison for human-readable terminal output.
///
/// One section per requested kind, one line per benchmark in the order the
/// benchmarks were supplied. The fastest line is green and the slowest red.
/// Kinds absent from the comparison are skipped.
pub fn format_comparison(comparison: &Comparison, kinds: &[StatisticKind]) -> String {
    let mut output = String::new();
    output.push_str(&format_box_top());

    if comparison.is_empty() {
        output.push_str(&format_box_line(&"No benchmarks to compare".dimmed().to_string()));
        output.push_str(&format_box_bottom());
        return output;
    }

    let name_width = comparison
        .benchmarks()
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    let mut first = true;
    for &kind in kinds {
        let Some(rows) = comparison.get(kind) else {
            continue;
        };
        if !first {
            output.push_str(&format_box_separator());
        }
        first = false;

        output.push_str(&format_box_line(&kind.name().bold().to_string()));
        for name in comparison.benchmarks() {
            if let Some(row) = rows.iter().find(|row| &row.test_name == name) {
                output.push_str(&format_box_line(&format_row(row, name_width)));
            }
        }
    }

    output.push_str(&format_box_bottom());
    output
}

fn format_row(row: &ComparisonRow, name_width: usize) -> String {
    let verdict = if row.is_fastest {
        "Fastest".to_string()
    } else {
        format!("Slower {:.3}%", row.percent_slower_than_fastest)
    };
    let line = format!(
        "  {:<name_width$}  {:>10.3} ms  {:<18}  {} ops, {:.1} ops/s",
        row.test_name, row.value, verdict, row.operation_count, row.ops_per_sec,
    );

    if row.is_fastest {
        line.green().to_string()
    } else if row.is_slowest {
        line.red().to_string()
    } else {
        line
    }
}

/// Format one benchmark's summary for human-readable terminal output.
pub fn format_summary(summary: &MeasurementSummary) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&summary.test_name.bold().to_string()));
    output.push_str(&format_box_separator());

    for (kind, value) in summary.statistics.iter() {
        let line = format!("{:<18} {:>12.3} ms", kind.name(), value);
        let line = if kind.is_normalized() {
            line.dimmed().to_string()
        } else {
            line
        };
        output.push_str(&format_box_line(&line));
    }

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&format!(
        "Operations: {}",
        summary.operation_count
    )));
    output.push_str(&format_box_line(&format!(
        "Ops/sec:    {:.1}",
        summary.ops_per_sec
    )));
    output.push_str(&format_box_bottom());

    output
}

// Box drawing helpers

const BOX_WIDTH: usize = 76;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
