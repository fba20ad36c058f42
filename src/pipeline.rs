//! One full recompute per UI event: aggregate, summarise, render; then, on
//! selection, look up the rate. Nothing survives between calls.

use crate::aggregate::fetch_category_counts;
use crate::error::RmResult;
use crate::figure::{Figure, Palette};
use crate::rate::{lookup_average_rate, RateResult};
use crate::summary::{build_display_table, DisplayTable, SelectedState};
use crate::warehouse::{QueryExecutor, TableRef};
use tracing::info;

#[derive(Debug, Clone)]
pub struct MapView {
    pub table: DisplayTable,
    pub figure: Figure,
}

impl MapView {
    pub fn state_options(&self) -> Vec<&str> {
        self.table.state_options()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateView {
    pub state: SelectedState,
    pub rate: RateResult,
}

impl RateView {
    pub fn render(&self) -> String {
        self.rate.render(self.state.as_str())
    }
}

pub fn refresh<E: QueryExecutor + ?Sized>(
    executor: &mut E,
    table: &TableRef,
    title: &str,
    palette: Palette,
) -> RmResult<MapView> {
    let counts = fetch_category_counts(executor, table)?;
    let display_table = build_display_table(&counts);
    info!("🗺️  {} states ready for display", display_table.len());
    let figure = Figure::choropleth(&display_table, title, palette);
    Ok(MapView {
        table: display_table,
        figure,
    })
}

pub fn select_rate<E: QueryExecutor + ?Sized>(
    executor: &mut E,
    table: &TableRef,
    state: SelectedState,
) -> RmResult<RateView> {
    let rate = lookup_average_rate(executor, table, &state)?;
    Ok(RateView { state, rate })
}
