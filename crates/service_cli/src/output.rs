//! Report rendering: table, JSON and CSV

use std::io::Write;

use clap::ValueEnum;
use pricer_models::analytical::Greeks;
use pricer_pricing::mc::{BatchReport, SimulationResult};
use serde::Serialize;

use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with header
    Csv,
}

/// One flat row per simulated strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Scenario label
    pub label: String,
    /// Entry cost
    pub cost: f64,
    /// Value at the target spot
    pub projected: f64,
    /// Mean value at the horizon
    pub expected_value: f64,
    /// Return at the target, in percent
    pub return_pct: f64,
    /// Probability of profit, in percent
    pub pop_pct: f64,
    /// Net delta
    pub delta: f64,
    /// Net gamma
    pub gamma: f64,
    /// Net theta per trading day
    pub theta: f64,
    /// Net vega per 1% volatility
    pub vega: f64,
    /// Net rho per 1% rate
    pub rho: f64,
    /// Failure message, empty on success
    pub error: String,
}

impl ReportRow {
    fn from_result(label: &str, result: &SimulationResult) -> Self {
        Self {
            label: label.to_string(),
            cost: result.entry_cost,
            projected: result.projected_value,
            expected_value: result.expected_value,
            return_pct: result.profit_percent,
            pop_pct: result.probability_of_profit * 100.0,
            delta: result.net_greeks.delta,
            gamma: result.net_greeks.gamma,
            theta: result.net_greeks.theta,
            vega: result.net_greeks.vega,
            rho: result.net_greeks.rho,
            error: String::new(),
        }
    }

    fn from_error(label: &str, error: &impl ToString) -> Self {
        Self {
            label: label.to_string(),
            cost: f64::NAN,
            projected: f64::NAN,
            expected_value: f64::NAN,
            return_pct: f64::NAN,
            pop_pct: f64::NAN,
            delta: f64::NAN,
            gamma: f64::NAN,
            theta: f64::NAN,
            vega: f64::NAN,
            rho: f64::NAN,
            error: error.to_string(),
        }
    }
}

/// Flatten a batch report into rows, failures included, in input order
pub fn report_rows(report: &BatchReport) -> Vec<ReportRow> {
    report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(result) => ReportRow::from_result(&outcome.label, result),
            Err(err) => ReportRow::from_error(&outcome.label, err),
        })
        .collect()
}

/// Write a batch report in the chosen format
pub fn write_report<W: Write>(out: &mut W, report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_report_table(out, report),
        OutputFormat::Json => {
            let results: Vec<_> = report.succeeded().map(|(_, result)| result).collect();
            let failures: Vec<_> = report
                .failed()
                .map(|(label, err)| serde_json::json!({ "label": label, "error": err.to_string() }))
                .collect();
            serde_json::to_writer_pretty(
                &mut *out,
                &serde_json::json!({ "results": results, "failures": failures }),
            )?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, &report_rows(report)),
    }
}

fn write_report_table<W: Write>(out: &mut W, report: &BatchReport) -> Result<()> {
    let rule = "-".repeat(118);
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{:<22}{:>10}{:>14}{:>13}{:>12}{:>9}{:>9}{:>9}{:>9}{:>9}{:>9}",
        "Strategy",
        "Cost",
        "Projected",
        "Exp Val",
        "Return %",
        "PoP %",
        "Delta",
        "Gamma",
        "Theta",
        "Vega",
        "Rho"
    )?;
    writeln!(out, "{}", rule)?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(r) => writeln!(
                out,
                "{:<22}{:>10.3}{:>14.3}{:>13.3}{:>12.2}{:>9.2}{:>9.3}{:>9.4}{:>9.4}{:>9.4}{:>9.4}",
                outcome.label,
                r.entry_cost,
                r.projected_value,
                r.expected_value,
                r.profit_percent,
                r.probability_of_profit * 100.0,
                r.net_greeks.delta,
                r.net_greeks.gamma,
                r.net_greeks.theta,
                r.net_greeks.vega,
                r.net_greeks.rho
            )?,
            Err(err) => writeln!(out, "{:<22}FAILED: {}", outcome.label, err)?,
        }
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Greeks of a single contract, labelled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreeksRow {
    /// Contract description
    pub contract: String,
    /// Option value
    pub premium: f64,
    /// Delta
    pub delta: f64,
    /// Gamma
    pub gamma: f64,
    /// Theta per trading day
    pub theta: f64,
    /// Vega per 1% volatility
    pub vega: f64,
    /// Rho per 1% rate
    pub rho: f64,
}

impl GreeksRow {
    /// Label a set of Greeks
    pub fn new(contract: impl Into<String>, greeks: &Greeks<f64>) -> Self {
        Self {
            contract: contract.into(),
            premium: greeks.premium,
            delta: greeks.delta,
            gamma: greeks.gamma,
            theta: greeks.theta,
            vega: greeks.vega,
            rho: greeks.rho,
        }
    }
}

/// Write contract Greeks in the chosen format
pub fn write_greeks<W: Write>(out: &mut W, rows: &[GreeksRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<24}{:>12}{:>10}{:>10}{:>10}{:>10}{:>10}",
                "Contract", "Premium", "Delta", "Gamma", "Theta", "Vega", "Rho"
            )?;
            for row in rows {
                writeln!(
                    out,
                    "{:<24}{:>12.4}{:>10.4}{:>10.4}{:>10.4}{:>10.4}{:>10.4}",
                    row.contract, row.premium, row.delta, row.gamma, row.theta, row.vega, row.rho
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, rows),
    }
}

fn write_csv<W: Write, R: Serialize>(out: &mut W, rows: &[R]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
