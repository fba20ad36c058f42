use super::Warehouse;
use crate::reports;
use clap::Args;
use ratemap::config::WarehouseConfig;
use ratemap::error::{RateMapError, RmResult};
use ratemap::figure::{Palette, DEFAULT_TITLE};
use ratemap::pipeline::{refresh, select_rate};

#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    #[command(flatten)]
    pub warehouse: WarehouseConfig,

    /// Full state name, as listed by `ratemap states`.
    #[arg(short, long)]
    pub state: String,
}

pub fn run(args: RateArgs) -> RmResult<()> {
    let table = args.warehouse.table_ref()?;
    let warehouse = Warehouse::open(&args.warehouse)?;

    let view = warehouse.run(|exec| {
        let map = refresh(exec, &table, DEFAULT_TITLE, Palette::Turbo)?;
        let selected = map.table.select(&args.state).ok_or_else(|| {
            RateMapError::Selection(format!(
                "'{}' is not selectable; choose one of the {} mapped states",
                args.state,
                map.table.len()
            ))
        })?;
        select_rate(exec, &table, selected)
    })?;

    reports::print_rate(&view);
    Ok(())
}
