#![allow(dead_code)]

use ratemap::aggregate::CategoryCount;
use ratemap::error::{RateMapError, RmResult};
use ratemap::warehouse::{QueryExecutor, Row, Statement, TableRef, Value};

/// Answers the two aggregation statements from canned rows and records
/// every statement it sees.
#[derive(Default)]
pub struct ScriptedExecutor {
    pub category_rows: Vec<Row>,
    pub rate_rows: Vec<Row>,
    pub seen: Vec<Statement>,
    pub fail_with: Option<fn() -> RateMapError>,
}

impl ScriptedExecutor {
    pub fn with_counts(counts: &[(&str, &str, i64)]) -> Self {
        Self {
            category_rows: counts
                .iter()
                .map(|(s, c, n)| vec![text(s), text(c), Value::Int(*n)])
                .collect(),
            ..Default::default()
        }
    }

    pub fn rate(mut self, cell: Value) -> Self {
        self.rate_rows = vec![vec![cell]];
        self
    }

    pub fn no_rate_rows(mut self) -> Self {
        self.rate_rows = Vec::new();
        self
    }

    pub fn failing(fail_with: fn() -> RateMapError) -> Self {
        Self {
            fail_with: Some(fail_with),
            ..Default::default()
        }
    }
}

impl QueryExecutor for ScriptedExecutor {
    fn fetch_all(&mut self, stmt: &Statement) -> RmResult<Vec<Row>> {
        self.seen.push(stmt.clone());
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        if stmt.sql.contains("COUNT(*)") {
            Ok(self.category_rows.clone())
        } else if stmt.sql.contains("AVG(") {
            Ok(self.rate_rows.clone())
        } else {
            Err(RateMapError::Query(format!("unscripted statement: {}", stmt.sql)))
        }
    }
}

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

pub fn table() -> TableRef {
    TableRef::new(Some("public"), "processed_master_file_category").unwrap()
}

pub fn counts(rows: &[(&str, &str, u64)]) -> Vec<CategoryCount> {
    rows.iter()
        .map(|(s, c, n)| CategoryCount::new(*s, *c, *n))
        .collect()
}
