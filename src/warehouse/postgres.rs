use super::{scoped, Param, QueryExecutor, Row, Statement, Value};
use crate::error::{RateMapError, RmResult};
use sqlx::postgres::{
    PgArguments, PgConnectOptions, PgConnection, PgPool, PgPoolOptions, PgRow, Postgres,
};
use sqlx::query::Query;
use sqlx::{Column, Connection, Row as _, TypeInfo};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, warn};

/// Parses a `postgres://` URL, optionally pointing it at another database.
pub fn connect_options(url: &str, database: Option<&str>) -> RmResult<PgConnectOptions> {
    let options: PgConnectOptions = url
        .parse()
        .map_err(|e: sqlx::Error| RateMapError::Config(format!("Invalid warehouse URL: {}", e)))?;
    Ok(match database {
        Some(db) => options.database(db),
        None => options,
    })
}

fn build_runtime() -> RmResult<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RateMapError::Connection(format!("Could not start client runtime: {}", e)))
}

fn bind_params(stmt: &Statement) -> Query<'_, Postgres, PgArguments> {
    let mut query = sqlx::query(&stmt.sql);
    for param in &stmt.params {
        query = match param {
            Param::Text(s) => query.bind(s.as_str()),
            Param::Int(i) => query.bind(*i),
            Param::Float(f) => query.bind(*f),
        };
    }
    query
}

fn decode_row(row: &PgRow) -> RmResult<Row> {
    row.columns()
        .iter()
        .map(|col| {
            let idx = col.ordinal();
            let type_name = col.type_info().name();
            let value = match type_name {
                "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
                    .try_get::<Option<String>, _>(idx)?
                    .map(|s| text_value(type_name, s)),
                "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(Value::Int),
                "INT4" => row
                    .try_get::<Option<i32>, _>(idx)?
                    .map(|v| Value::Int(v.into())),
                "INT2" => row
                    .try_get::<Option<i16>, _>(idx)?
                    .map(|v| Value::Int(v.into())),
                "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(Value::Float),
                "FLOAT4" => row
                    .try_get::<Option<f32>, _>(idx)?
                    .map(|v| Value::Float(v.into())),
                other => {
                    return Err(RateMapError::Shape(format!(
                        "column '{}' has unsupported type {}",
                        col.name(),
                        other
                    )))
                }
            };
            Ok(value.unwrap_or(Value::Null))
        })
        .collect()
}

/// `CHAR(n)` values arrive space-padded to `n`; strip the pad so names
/// still match exactly.
fn text_value(type_name: &str, mut s: String) -> Value {
    if type_name == "BPCHAR" {
        let len = s.trim_end_matches(' ').len();
        s.truncate(len);
    }
    Value::Text(s)
}

fn log_statement(stmt: &Statement) {
    debug!(
        "   SQL: {} ({} bound params)",
        stmt.sql.split_whitespace().collect::<Vec<_>>().join(" "),
        stmt.params.len()
    );
}

/// Long-lived pooled session owned by the hosting shell.
///
/// The pipeline only ever borrows it through [`SessionExecutor`]; the pool
/// is closed when the owner drops the session.
pub struct PgSession {
    runtime: Runtime,
    pool: PgPool,
}

impl PgSession {
    pub fn open(options: PgConnectOptions, max_connections: u32) -> RmResult<Self> {
        let runtime = build_runtime()?;
        let pool = runtime.block_on(
            PgPoolOptions::new()
                .max_connections(max_connections.max(1))
                .connect_with(options),
        )?;
        info!("🔌 Warehouse session opened ({} max connections)", max_connections.max(1));
        Ok(Self { runtime, pool })
    }

    pub fn executor(&self) -> SessionExecutor<'_> {
        SessionExecutor { session: self }
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        self.runtime.block_on(self.pool.close());
        debug!("Warehouse session closed");
    }
}

pub struct SessionExecutor<'a> {
    session: &'a PgSession,
}

impl QueryExecutor for SessionExecutor<'_> {
    fn fetch_all(&mut self, stmt: &Statement) -> RmResult<Vec<Row>> {
        log_statement(stmt);
        let rows = self
            .session
            .runtime
            .block_on(bind_params(stmt).fetch_all(&self.session.pool))?;
        rows.iter().map(decode_row).collect()
    }
}

/// Direct client-credentials connection, scoped to one pipeline execution.
pub struct PgConnector {
    runtime: Runtime,
    conn: Option<PgConnection>,
}

impl PgConnector {
    pub fn connect(options: &PgConnectOptions) -> RmResult<Self> {
        let runtime = build_runtime()?;
        let conn = runtime.block_on(PgConnection::connect_with(options))?;
        debug!("Warehouse connection opened");
        Ok(Self {
            runtime,
            conn: Some(conn),
        })
    }

    /// Opens a connection, runs `f` against it and closes it again, whether
    /// `f` succeeded or not. An error from `f` takes precedence over an
    /// error from closing.
    pub fn with_connection<T>(
        options: &PgConnectOptions,
        f: impl FnOnce(&mut PgConnector) -> RmResult<T>,
    ) -> RmResult<T> {
        scoped(Self::connect(options)?, f, PgConnector::close)
    }

    pub fn close(mut self) -> RmResult<()> {
        if let Some(conn) = self.conn.take() {
            self.runtime.block_on(conn.close())?;
            debug!("Warehouse connection closed");
        }
        Ok(())
    }
}

impl Drop for PgConnector {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err(e) = self.runtime.block_on(conn.close()) {
                warn!("⚠️  Failed to close warehouse connection cleanly: {}", e);
            }
        }
    }
}

impl QueryExecutor for PgConnector {
    fn fetch_all(&mut self, stmt: &Statement) -> RmResult<Vec<Row>> {
        log_statement(stmt);
        let conn = self
            .conn
            .as_mut()
            .ok_or_else(|| RateMapError::Connection("connection already closed".to_string()))?;
        let rows = self.runtime.block_on(bind_params(stmt).fetch_all(conn))?;
        rows.iter().map(decode_row).collect()
    }
}
