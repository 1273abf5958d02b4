//! Year-by-year dividend reinvestment projection.
//!
//! Inputs are not validated here. A zero or negative `current_price`, or a
//! zero starting investment, produces degenerate but finite output.

use crate::models::{ProjectionInput, ProjectionResult, YearPoint};

pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let dividend_yield = input.dividend_yield_pct / 100.0;
    let growth = input.stock_growth_pct / 100.0;
    let tax_rate = input.tax_rate_pct / 100.0;
    let annual_contribution = input.monthly_contribution * 12.0;

    let mut total_shares = if input.current_price > 0.0 {
        input.initial_investment / input.current_price
    } else {
        input.initial_investment
    };
    let mut total_invested = input.initial_investment;
    let mut total_dividends = 0.0;
    let mut portfolio_value = input.initial_investment;

    let mut series = Vec::with_capacity(input.years as usize);
    for year in 1..=input.years {
        // Price per share is fixed for the whole year until growth is applied.
        let price_per_share = implied_price(portfolio_value, total_shares);

        total_invested += annual_contribution;
        if portfolio_value != 0.0 {
            total_shares += total_shares * (annual_contribution / portfolio_value);
        }

        let gross_dividends = total_shares * price_per_share * dividend_yield;
        let net_dividends = gross_dividends * (1.0 - tax_rate);
        total_dividends += net_dividends;
        total_shares += net_dividends / price_per_share;

        portfolio_value = total_shares * price_per_share * (1.0 + growth);

        series.push(YearPoint {
            year,
            portfolio_value: round_cents(portfolio_value),
            total_contributions: round_cents(total_invested),
        });
    }

    ProjectionResult {
        final_value: portfolio_value,
        total_contributions: total_invested,
        total_dividends_net: total_dividends,
        series,
    }
}

fn implied_price(portfolio_value: f64, total_shares: f64) -> f64 {
    if total_shares == 0.0 {
        1.0
    } else {
        portfolio_value / total_shares
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProjectionInput {
        ProjectionInput {
            initial_investment: 10_000.0,
            monthly_contribution: 0.0,
            years: 1,
            dividend_yield_pct: 0.0,
            stock_growth_pct: 0.0,
            tax_rate_pct: 0.0,
            current_price: 50.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn one_year_of_growth() {
        let result = project(&ProjectionInput {
            stock_growth_pct: 10.0,
            ..input()
        });
        assert_close(result.final_value, 11_000.0);
        assert_eq!(result.series[0].portfolio_value, 11_000.0);
    }

    #[test]
    fn contributions_without_growth_are_fully_realized() {
        let result = project(&ProjectionInput {
            monthly_contribution: 100.0,
            ..input()
        });
        assert_close(result.total_contributions, 11_200.0);
        assert_close(result.final_value, 11_200.0);
        assert_eq!(result.total_dividends_net, 0.0);
    }

    #[test]
    fn pure_compounding_matches_closed_form() {
        let result = project(&ProjectionInput {
            stock_growth_pct: 7.0,
            years: 30,
            ..input()
        });
        assert_close(result.final_value, 10_000.0 * 1.07_f64.powi(30));
    }

    #[test]
    fn no_growth_no_yield_value_equals_contributions() {
        let result = project(&ProjectionInput {
            monthly_contribution: 250.0,
            years: 12,
            ..input()
        });
        assert_close(result.final_value, result.total_contributions);
        assert_eq!(result.total_dividends_net, 0.0);
    }

    #[test]
    fn total_contributions_are_linear_in_years() {
        for years in [1, 5, 17, 50] {
            let result = project(&ProjectionInput {
                monthly_contribution: 125.0,
                stock_growth_pct: 6.0,
                dividend_yield_pct: 3.0,
                years,
                ..input()
            });
            assert_close(
                result.total_contributions,
                10_000.0 + 125.0 * 12.0 * f64::from(years),
            );
        }
    }

    #[test]
    fn series_is_numbered_one_to_years() {
        let result = project(&ProjectionInput {
            years: 25,
            monthly_contribution: 50.0,
            dividend_yield_pct: 2.0,
            ..input()
        });
        assert_eq!(result.series.len(), 25);
        let years: Vec<u32> = result.series.iter().map(|point| point.year).collect();
        assert_eq!(years, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn dividends_are_taxed_and_reinvested() {
        let result = project(&ProjectionInput {
            dividend_yield_pct: 4.0,
            tax_rate_pct: 25.0,
            ..input()
        });
        // 10_000 * 4% = 400 gross, 300 after tax, reinvested at an unchanged price.
        assert_close(result.total_dividends_net, 300.0);
        assert_close(result.final_value, 10_300.0);
    }

    #[test]
    fn full_tax_leaves_value_untouched_by_dividends() {
        let result = project(&ProjectionInput {
            dividend_yield_pct: 5.0,
            tax_rate_pct: 100.0,
            years: 3,
            ..input()
        });
        assert_close(result.total_dividends_net, 0.0);
        assert_close(result.final_value, 10_000.0);
    }

    #[test]
    fn series_values_are_rounded_to_cents() {
        let result = project(&ProjectionInput {
            monthly_contribution: 33.333,
            stock_growth_pct: 3.3,
            dividend_yield_pct: 1.7,
            years: 4,
            ..input()
        });
        for point in &result.series {
            assert_eq!(point.portfolio_value, round_cents(point.portfolio_value));
            assert_eq!(point.total_contributions, round_cents(point.total_contributions));
        }
        let last = result.series.last().unwrap();
        assert_eq!(last.portfolio_value, round_cents(result.final_value));
    }

    #[test]
    fn starting_price_does_not_change_the_outcome() {
        let base = ProjectionInput {
            monthly_contribution: 200.0,
            stock_growth_pct: 8.0,
            dividend_yield_pct: 3.5,
            tax_rate_pct: 15.0,
            years: 10,
            ..input()
        };
        let cheap = project(&ProjectionInput {
            current_price: 5.0,
            ..base
        });
        let dear = project(&ProjectionInput {
            current_price: 500.0,
            ..base
        });
        assert_close(cheap.final_value, dear.final_value);
        assert_close(cheap.total_dividends_net, dear.total_dividends_net);
    }

    #[test]
    fn zero_price_falls_back_to_unit_price() {
        let result = project(&ProjectionInput {
            current_price: 0.0,
            stock_growth_pct: 10.0,
            ..input()
        });
        assert!(result.final_value.is_finite());
        assert_close(result.final_value, 11_000.0);
    }

    #[test]
    fn empty_portfolio_never_buys_shares() {
        let result = project(&ProjectionInput {
            initial_investment: 0.0,
            monthly_contribution: 100.0,
            stock_growth_pct: 5.0,
            years: 3,
            ..input()
        });
        assert_eq!(result.final_value, 0.0);
        assert_close(result.total_contributions, 3_600.0);
        assert_eq!(result.series.len(), 3);
    }

    #[test]
    fn zero_years_returns_the_starting_position() {
        let result = project(&ProjectionInput {
            years: 0,
            monthly_contribution: 100.0,
            ..input()
        });
        assert!(result.series.is_empty());
        assert_eq!(result.final_value, 10_000.0);
        assert_eq!(result.total_contributions, 10_000.0);
    }
}
