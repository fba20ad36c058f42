use super::{write_outputs, Warehouse};
use crate::reports;
use clap::Args;
use ratemap::config::Config;
use ratemap::error::RmResult;
use ratemap::pipeline::refresh;

#[derive(Args, Debug, Clone)]
pub struct MapArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: MapArgs) -> RmResult<()> {
    let table = args.config.warehouse.table_ref()?;
    let render = &args.config.render;
    let warehouse = Warehouse::open(&args.config.warehouse)?;

    let view = warehouse.run(|exec| refresh(exec, &table, &render.title, render.color_scale))?;

    reports::print_display_table(&view.table);
    write_outputs(&view, render)
}
