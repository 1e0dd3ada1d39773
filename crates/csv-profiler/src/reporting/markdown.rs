use crate::types::{ColumnProfile, ColumnStats, IssueLevel, NumericColumnProfile, Report, TextColumnProfile};
use crate::utils::format_thousands;

/// Render a report as a human-readable Markdown document.
///
/// `generated_at` is printed verbatim under the title so callers control the
/// clock (and tests stay deterministic).
pub fn render_markdown(report: &Report, generated_at: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# CSV Profiling Report".to_string());
    lines.push(String::new());
    lines.push(format!("**Generated:** {}", generated_at));
    lines.push(String::new());

    lines.push("## Summary".to_string());
    lines.push(String::new());
    lines.push(format!("- **Total Rows:** {}", format_thousands(report.n_rows)));
    lines.push(format!("- **Total Columns:** {}", report.n_cols));
    if let Some(timing_ms) = report.timing_ms {
        lines.push(format!("- **Processing Time:** {:.2} ms", timing_ms));
    }
    lines.push(String::new());

    lines.push("## Column Overview".to_string());
    lines.push(String::new());
    lines.push("| Column | Type | Missing | Missing % | Unique |".to_string());
    lines.push("|--------|------|--------:|----------:|-------:|".to_string());
    for column in &report.columns {
        let counts = column.counts();
        lines.push(format!(
            "| {} | {} | {} | {:.1}% | {} |",
            escape_cell(&column.name),
            column.column_type(),
            counts.missing,
            counts.missing_pct,
            counts.unique
        ));
    }
    lines.push(String::new());

    lines.push("## Detailed Statistics".to_string());
    lines.push(String::new());
    for column in &report.columns {
        render_column(&mut lines, column);
    }

    lines.join("\n")
}

fn render_column(lines: &mut Vec<String>, column: &ColumnProfile) {
    lines.push(format!("### {}", column.name));
    lines.push(String::new());

    if !column.quality_issues.is_empty() {
        lines.push("**Data Quality Issues:**".to_string());
        for issue in &column.quality_issues {
            let marker = match issue.level {
                IssueLevel::Warning => "**Warning:**",
                IssueLevel::Info => "*Info:*",
            };
            lines.push(format!("- {} {}", marker, issue.message));
        }
        lines.push(String::new());
    }

    let counts = column.counts();
    lines.push(format!("- **Type:** {}", column.column_type()));
    lines.push(format!("- **Non-missing count:** {}", format_thousands(counts.count)));
    lines.push(format!("- **Missing:** {} ({:.1}%)", counts.missing, counts.missing_pct));
    lines.push(format!("- **Unique values:** {}", format_thousands(counts.unique)));

    match &column.stats {
        ColumnStats::Number(stats) => render_numeric(lines, stats),
        ColumnStats::Text(stats) => render_text(lines, stats),
    }

    lines.push(String::new());
}

fn render_numeric(lines: &mut Vec<String>, stats: &NumericColumnProfile) {
    let (Some(min), Some(max), Some(mean), Some(median), Some(std)) =
        (stats.min, stats.max, stats.mean, stats.median, stats.std)
    else {
        return;
    };

    lines.push(format!("- **Min:** {:.2}", min));
    lines.push(format!("- **Max:** {:.2}", max));
    lines.push(format!("- **Mean:** {:.2}", mean));
    lines.push(format!("- **Median:** {:.2}", median));
    if let Some(mode) = stats.mode {
        lines.push(format!("- **Mode:** {:.2}", mode));
    }
    lines.push(format!("- **Std Dev:** {:.2}", std));
    if let (Some(q1), Some(q3), Some(iqr)) = (stats.q1, stats.q3, stats.iqr()) {
        lines.push(format!("- **Q1 (25th percentile):** {:.2}", q1));
        lines.push(format!("- **Q3 (75th percentile):** {:.2}", q3));
        lines.push(format!("- **IQR (Interquartile Range):** {:.2}", iqr));
    }
}

fn render_text(lines: &mut Vec<String>, stats: &TextColumnProfile) {
    if stats.top.is_empty() {
        return;
    }
    lines.push("- **Top values:**".to_string());
    for top in &stats.top {
        lines.push(format!("  - `{}`: {} occurrences", top.value, top.count));
    }
}

/// Pipes would otherwise split a table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
