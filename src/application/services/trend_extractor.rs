use std::sync::LazyLock;

use regex::Regex;

static YEAR_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d{4}\b").unwrap());

static COLUMN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+|\s{2,}").unwrap());

/// Best-effort trend sentences for a whitespace-aligned table embedded in `text`.
///
/// The table is found by locating the first line that starts with a 4-digit
/// year and taking the closest non-blank line above it as the header. Header
/// and data lines are split on tabs or runs of two or more spaces; only rows
/// with as many columns as the header are kept. The first column labels each
/// row, every other column is read as numbers. A column with any value that
/// does not parse is skipped without error.
pub fn extract_statistical_insights(text: &str) -> Vec<String> {
    let Some(table) = locate_table(text) else {
        return Vec::new();
    };

    let mut insights = Vec::new();

    for (column_index, column_name) in table.header.iter().enumerate().skip(1) {
        let values: Option<Vec<f64>> = table
            .rows
            .iter()
            .map(|row| parse_number(&row[column_index]))
            .collect();

        let Some(values) = values else {
            tracing::debug!(column = %column_name, "Skipping non-numeric column");
            continue;
        };

        let keys: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
        describe_column(column_name, &keys, &values, &mut insights);
    }

    insights
}

struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn locate_table(text: &str) -> Option<Table> {
    let lines: Vec<&str> = text.lines().collect();
    let first_year_row = lines.iter().position(|line| YEAR_ROW.is_match(line))?;

    let header_line = lines[..first_year_row]
        .iter()
        .rev()
        .find(|line| !line.trim().is_empty())?;
    let header = split_columns(header_line);

    if header.len() < 2 {
        return None;
    }

    let rows: Vec<Vec<String>> = lines[first_year_row..]
        .iter()
        .filter(|line| line.chars().any(|c| c.is_ascii_digit()))
        .map(|line| split_columns(line))
        .filter(|cells| cells.len() == header.len())
        .collect();

    if rows.len() < 2 {
        return None;
    }

    Some(Table { header, rows })
}

fn split_columns(line: &str) -> Vec<String> {
    COLUMN_SEPARATOR
        .split(line.trim())
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

fn parse_number(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | '$') && !c.is_whitespace())
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn describe_column(name: &str, keys: &[&str], values: &[f64], out: &mut Vec<String>) {
    let (increases, decreases) = values
        .windows(2)
        .fold((0usize, 0usize), |(inc, dec), pair| {
            if pair[1] > pair[0] {
                (inc + 1, dec)
            } else if pair[1] < pair[0] {
                (inc, dec + 1)
            } else {
                (inc, dec)
            }
        });
    let steps = values.len() - 1;

    let first = format_number(values[0]);
    let last = format_number(values[steps]);

    if increases == steps {
        out.push(format!(
            "{name} increased consistently from {first} in {} to {last} in {}.",
            keys[0], keys[steps]
        ));
    } else if decreases == steps {
        out.push(format!(
            "{name} decreased consistently from {first} in {} to {last} in {}.",
            keys[0], keys[steps]
        ));
    } else if increases == 0 && decreases == 0 {
        out.push(format!("{name} remained constant at {first}."));
        return;
    } else {
        out.push(format!(
            "{name} showed a mixed trend with {increases} increases and {decreases} decreases."
        ));
    }

    let (max_index, max) = extreme(values, |candidate, best| candidate > best);
    let (min_index, min) = extreme(values, |candidate, best| candidate < best);

    out.push(format!(
        "{name} peaked at {} in {} and was lowest at {} in {}.",
        format_number(max),
        keys[max_index],
        format_number(min),
        keys[min_index]
    ));
}

/// First index wins on ties.
fn extreme(values: &[f64], better: impl Fn(f64, f64) -> bool) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, values[0]), |(best_index, best), (index, value)| {
            if better(value, best) {
                (index, value)
            } else {
                (best_index, best)
            }
        })
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
