use crate::error::{RateMapError, RmResult};
use crate::summary::SelectedState;
use crate::warehouse::{Param, QueryExecutor, Statement, TableRef, Value};
use tracing::{debug, info};

/// Average negotiated rate for one state, or `None` when no record qualifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateResult(pub Option<f64>);

impl RateResult {
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn render(&self, state: &str) -> String {
        match self.0 {
            Some(v) => format!("Average Negotiated Rate for {}: ${:.2}", state, round_cents(v)),
            None => format!("Average Negotiated Rate for {}: no data", state),
        }
    }
}

pub fn average_rate_statement(table: &TableRef, state: &SelectedState) -> Statement {
    Statement::new(format!(
        "SELECT CAST(ROUND(CAST(AVG(negotiated_rate) AS NUMERIC), 2) AS DOUBLE PRECISION) \
         AS avg_negotiated_rate \
         FROM {} \
         WHERE state = $1",
        table
    ))
    .bind(Param::Text(state.as_str().to_string()))
}

pub fn lookup_average_rate<E: QueryExecutor + ?Sized>(
    executor: &mut E,
    table: &TableRef,
    state: &SelectedState,
) -> RmResult<RateResult> {
    let rows = executor.fetch_all(&average_rate_statement(table, state))?;
    let result = match rows.into_iter().next() {
        None => RateResult(None),
        Some(row) => RateResult(decode_rate_cell(row.into_iter().next())?),
    };

    match result.value() {
        Some(v) => info!("💲 Average negotiated rate for {}: {:.2}", state, v),
        None => debug!("No negotiated rate data for {}", state),
    }
    Ok(result)
}

fn decode_rate_cell(cell: Option<Value>) -> RmResult<Option<f64>> {
    match cell {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Float(v)) if v.is_finite() => Ok(Some(round_cents(v))),
        Some(Value::Int(v)) => Ok(Some(v as f64)),
        Some(other) => Err(RateMapError::Shape(format!(
            "average rate came back as {}, expected a number",
            other.kind()
        ))),
    }
}

fn round_cents(v: f64) -> f64 {
    let rounded = (v * 100.0).round() / 100.0;
    // Collapse -0.0 so it never prints as "-0.00".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
