//! Reshapes category groups into one display row per state.

use crate::aggregate::CategoryCount;
use crate::error::RmResult;
use crate::states::lookup_state;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Line-break marker understood by the map widget's hover labels.
pub const TOOLTIP_SEPARATOR: &str = "<br>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSummary {
    pub state: String,
    pub total_count: u64,
    pub tooltip_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub state: String,
    pub state_code: &'static str,
    pub total_count: u64,
    pub tooltip_text: String,
}

/// Totals and tooltips per state, in order of each state's first row.
///
/// Category segments keep arrival order. A category seen twice for the same
/// state is folded into its first segment.
pub fn summarize(rows: &[CategoryCount]) -> Vec<StateSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<(&str, u64)>)> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.state.as_str()).or_insert_with(|| {
            groups.push((row.state.as_str(), Vec::new()));
            groups.len() - 1
        });
        let categories = &mut groups[slot].1;
        match categories.iter_mut().find(|(c, _)| *c == row.category) {
            Some((_, n)) => *n += row.count,
            None => categories.push((row.category.as_str(), row.count)),
        }
    }

    groups
        .into_iter()
        .map(|(state, categories)| StateSummary {
            state: state.to_string(),
            total_count: categories.iter().map(|(_, n)| n).sum(),
            tooltip_text: render_tooltip(&categories),
        })
        .collect()
}

fn render_tooltip(categories: &[(&str, u64)]) -> String {
    categories
        .iter()
        .map(|(category, count)| format!("{}: {}", category, count))
        .collect::<Vec<_>>()
        .join(TOOLTIP_SEPARATOR)
}

pub fn build_display_table(rows: &[CategoryCount]) -> DisplayTable {
    DisplayTable::from_summaries(summarize(rows))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTable {
    rows: Vec<DisplayRow>,
}

impl DisplayTable {
    /// Attaches postal codes, dropping every summary whose state name is not
    /// one of the 50 states.
    pub fn from_summaries(summaries: Vec<StateSummary>) -> Self {
        let total = summaries.len();
        let rows: Vec<DisplayRow> = summaries
            .into_iter()
            .filter_map(|s| match lookup_state(&s.state) {
                Some(code) => Some(DisplayRow {
                    state: s.state,
                    state_code: code.code(),
                    total_count: s.total_count,
                    tooltip_text: s.tooltip_text,
                }),
                None => {
                    warn!("Dropping '{}': no postal code for this state name", s.state);
                    None
                }
            })
            .collect();
        debug!("   -> {} of {} states kept for display", rows.len(), total);
        Self { rows }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, state: &str) -> Option<&DisplayRow> {
        self.rows.iter().find(|r| r.state == state)
    }

    /// Domain of the state selection control: sorted, deduplicated.
    pub fn state_options(&self) -> Vec<&str> {
        let mut options: Vec<&str> = self.rows.iter().map(|r| r.state.as_str()).collect();
        options.sort_unstable();
        options.dedup();
        options
    }

    pub fn write_csv(&self, path: &Path) -> RmResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("💾 Display table written to {}", path.display());
        Ok(())
    }

    /// Carries a previous choice over to this table. Falls back to the first
    /// option when the previous state is gone, and to `None` when there is
    /// nothing to select.
    pub fn reselect(&self, previous: Option<&str>) -> Option<SelectedState> {
        previous
            .and_then(|s| self.select(s))
            .or_else(|| self.state_options().first().and_then(|s| self.select(s)))
    }

    /// The only way to obtain a [`SelectedState`].
    pub fn select(&self, state: &str) -> Option<SelectedState> {
        self.get(state).map(|r| SelectedState(r.state.clone()))
    }
}

/// A state name taken from a [`DisplayTable`]'s selection domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedState(String);

impl SelectedState {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
