pub mod explore;
pub mod map;
pub mod rate;
pub mod states;

use ratemap::config::{ConnectionMode, RenderConfig, WarehouseConfig};
use ratemap::error::RmResult;
use ratemap::pipeline::MapView;
use ratemap::warehouse::{PgConnector, PgSession, QueryExecutor};
use sqlx::postgres::PgConnectOptions;

/// The shell's handle on the warehouse. Session mode keeps one pool for the
/// process; connector mode opens and closes a connection per run.
pub enum Warehouse {
    Session(PgSession),
    Connector(PgConnectOptions),
}

impl Warehouse {
    pub fn open(config: &WarehouseConfig) -> RmResult<Self> {
        let options = config.connect_options()?;
        Ok(match config.connection {
            ConnectionMode::Session => {
                Self::Session(PgSession::open(options, config.max_connections)?)
            }
            ConnectionMode::Connector => Self::Connector(options),
        })
    }

    pub fn run<T>(&self, f: impl FnOnce(&mut dyn QueryExecutor) -> RmResult<T>) -> RmResult<T> {
        match self {
            Self::Session(session) => {
                let mut executor = session.executor();
                f(&mut executor)
            }
            Self::Connector(options) => PgConnector::with_connection(options, |conn| f(conn)),
        }
    }
}

pub fn write_outputs(view: &MapView, render: &RenderConfig) -> RmResult<()> {
    if let Some(path) = &render.html {
        view.figure.write_html(path)?;
    }
    if let Some(path) = &render.json {
        view.figure.write_json(path)?;
    }
    if let Some(path) = &render.csv {
        view.table.write_csv(path)?;
    }
    Ok(())
}
