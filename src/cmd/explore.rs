use super::{write_outputs, Warehouse};
use crate::reports;
use clap::Args;
use dialoguer::Select;
use ratemap::config::Config;
use ratemap::error::{RateMapError, RmResult};
use ratemap::pipeline::{refresh, select_rate};
use tracing::warn;

const SELECT_PROMPT: &str = "👇 Select a state to view average NEGOTIATED_RATE";
const QUIT: &str = "Quit";

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub config: Config,
}

/// Every selection re-runs the whole pipeline against fresh data, the way a
/// re-executing UI would.
pub fn run(args: ExploreArgs) -> RmResult<()> {
    let table = args.config.warehouse.table_ref()?;
    let render = &args.config.render;
    let warehouse = Warehouse::open(&args.config.warehouse)?;
    let mut selection: Option<String> = None;

    loop {
        let (view, rate) = warehouse.run(|exec| {
            let view = refresh(exec, &table, &render.title, render.color_scale)?;
            let rate = match view.table.reselect(selection.as_deref()) {
                Some(state) => Some(select_rate(exec, &table, state)?),
                None => None,
            };
            Ok((view, rate))
        })?;

        write_outputs(&view, render)?;
        reports::print_display_table(&view.table);
        if let Some(rate) = &rate {
            reports::print_rate(rate);
        }

        let options = view.state_options();
        if options.is_empty() {
            warn!("⚠️  No mappable states in the warehouse; nothing to select.");
            return Ok(());
        }

        let current = rate
            .as_ref()
            .and_then(|r| options.iter().position(|s| *s == r.state.as_str()))
            .unwrap_or(0);
        let mut items = options.clone();
        items.push(QUIT);

        let choice = Select::new()
            .with_prompt(SELECT_PROMPT)
            .items(&items)
            .default(current)
            .interact()
            .map_err(|e| RateMapError::Selection(e.to_string()))?;

        if choice >= options.len() {
            return Ok(());
        }
        selection = Some(options[choice].to_string());
    }
}
