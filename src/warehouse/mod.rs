//! Warehouse seam: the core pipeline only ever talks to a [`QueryExecutor`].
//!
//! Statements carry their bound parameters separately from the SQL text;
//! nothing user-chosen is ever spliced into `sql`.

pub mod postgres;

use crate::error::{RateMapError, RmResult};
use std::fmt;

pub use postgres::{PgConnector, PgSession, SessionExecutor};

/// A single cell as returned by the warehouse.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }
}

pub type Row = Vec<Value>;

/// A value bound to a positional placeholder (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

/// "Run query, get rows". Implementations block until the warehouse answers.
pub trait QueryExecutor {
    fn fetch_all(&mut self, stmt: &Statement) -> RmResult<Vec<Row>>;
}

/// Coordinates of the processed-records table, `[schema.]table`.
///
/// Identifiers cannot be bound as parameters, so they are validated once
/// here and rendered verbatim afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    schema: Option<String>,
    table: String,
}

impl TableRef {
    pub fn new(schema: Option<&str>, table: &str) -> RmResult<Self> {
        let schema = match schema {
            Some(s) if !s.is_empty() => Some(validate_identifier(s)?.to_string()),
            _ => None,
        };
        Ok(Self {
            schema,
            table: validate_identifier(table)?.to_string(),
        })
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.table),
            None => write!(f, "{}", self.table),
        }
    }
}

/// Runs `f` against `resource`, then hands it to `close` whether `f`
/// succeeded or not. An error from `f` takes precedence over an error from
/// closing.
pub fn scoped<R, T>(
    mut resource: R,
    f: impl FnOnce(&mut R) -> RmResult<T>,
    close: impl FnOnce(R) -> RmResult<()>,
) -> RmResult<T> {
    let result = f(&mut resource);
    let closed = close(resource);
    let value = result?;
    closed?;
    Ok(value)
}

pub fn validate_identifier(ident: &str) -> RmResult<&str> {
    let mut chars = ident.chars();
    let valid_head = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid_head && valid_tail {
        Ok(ident)
    } else {
        Err(RateMapError::Config(format!(
            "'{}' is not a valid SQL identifier",
            ident
        )))
    }
}
