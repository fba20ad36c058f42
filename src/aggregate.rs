use crate::error::{RateMapError, RmResult};
use crate::warehouse::{QueryExecutor, Row, Statement, TableRef, Value};
use tracing::{debug, info};

/// One (state, category) group and the number of records in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub state: String,
    pub category: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(state: impl Into<String>, category: impl Into<String>, count: u64) -> Self {
        Self {
            state: state.into(),
            category: category.into(),
            count,
        }
    }
}

pub fn category_counts_statement(table: &TableRef) -> Statement {
    Statement::new(format!(
        "SELECT state, category, COUNT(*) AS category_count \
         FROM {} \
         WHERE state IS NOT NULL AND category IS NOT NULL \
         GROUP BY state, category \
         ORDER BY state, category",
        table
    ))
}

/// Runs the grouped count query. Connection and query failures propagate
/// as-is; there is no retry.
pub fn fetch_category_counts<E: QueryExecutor + ?Sized>(
    executor: &mut E,
    table: &TableRef,
) -> RmResult<Vec<CategoryCount>> {
    let rows = executor.fetch_all(&category_counts_statement(table))?;
    debug!("   -> {} (state, category) groups received", rows.len());

    let counts = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| decode_category_row(i, row))
        .collect::<RmResult<Vec<_>>>()?;

    info!("📊 Aggregated {} category groups from {}", counts.len(), table);
    Ok(counts)
}

fn decode_category_row(idx: usize, row: Row) -> RmResult<CategoryCount> {
    let [state, category, count]: [Value; 3] = row.try_into().map_err(|r: Row| {
        RateMapError::Shape(format!(
            "category row #{} has {} columns, expected 3",
            idx + 1,
            r.len()
        ))
    })?;

    let state = expect_text(idx, "state", state)?;
    let category = expect_text(idx, "category", category)?;
    let count = match count {
        Value::Int(n) if n >= 0 => n as u64,
        other => {
            return Err(RateMapError::Shape(format!(
                "category row #{} has a non-count value ({}) in column 3",
                idx + 1,
                other.kind()
            )))
        }
    };

    Ok(CategoryCount {
        state,
        category,
        count,
    })
}

fn expect_text(idx: usize, column: &str, value: Value) -> RmResult<String> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(RateMapError::Shape(format!(
            "category row #{} has {} in column '{}', expected text",
            idx + 1,
            other.kind(),
            column
        ))),
    }
}
