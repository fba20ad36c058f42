use super::Warehouse;
use crate::reports;
use clap::Args;
use ratemap::config::WarehouseConfig;
use ratemap::error::RmResult;
use ratemap::figure::{Palette, DEFAULT_TITLE};
use ratemap::pipeline::refresh;

#[derive(Args, Debug, Clone)]
pub struct StatesArgs {
    #[command(flatten)]
    pub warehouse: WarehouseConfig,
}

pub fn run(args: StatesArgs) -> RmResult<()> {
    let table = args.warehouse.table_ref()?;
    let warehouse = Warehouse::open(&args.warehouse)?;
    let view = warehouse.run(|exec| refresh(exec, &table, DEFAULT_TITLE, Palette::Turbo))?;
    reports::print_state_options(&view.state_options());
    Ok(())
}
