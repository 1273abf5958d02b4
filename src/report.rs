use crate::models::{ProjectionReport, ProjectionResult, Summary};

pub fn build_report(result: ProjectionResult) -> ProjectionReport {
    let summary = Summary {
        final_value: format_currency(result.final_value),
        total_contributions: format_currency(result.total_contributions),
        total_dividends: format_currency(result.total_dividends_net),
    };
    ProjectionReport { summary, result }
}

/// Formats as US dollars with thousands separators, e.g. `$12,345.67`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
