//! Plotly choropleth figure built from a [`DisplayTable`].
//!
//! The figure is plain data; any plotly.js host can render it. [`Figure::to_html`]
//! wraps it in a standalone page for the terminal shell.

use crate::error::RmResult;
use crate::summary::DisplayTable;
use minijinja::{context, Environment};
use serde::Serialize;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

pub const DEFAULT_TITLE: &str = "📍 Hover on a State to See CATEGORY Counts";

static MAP_PAGE_TMPL: &str = include_str!("./map.html.jinja");

// plotly.js has no built-in Turbo scale.
const TURBO: [&str; 15] = [
    "#30123b", "#4145ab", "#4675ed", "#39a2fc", "#1bcfd4", "#24eca6", "#61fc6c", "#a4fc3b",
    "#d1e834", "#f3c63a", "#fe9b2d", "#f36315", "#d93806", "#b11901", "#7a0402",
];

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum Palette {
    Turbo,
    Viridis,
    Cividis,
    Blues,
    Reds,
    Greens,
    Hot,
    Jet,
    YlOrRd,
    YlGnBu,
}

impl Palette {
    pub fn colorscale(&self) -> ColorScale {
        match self {
            Self::Turbo => {
                let last = (TURBO.len() - 1) as f64;
                ColorScale::Stops(
                    TURBO
                        .iter()
                        .enumerate()
                        .map(|(i, c)| (i as f64 / last, c.to_string()))
                        .collect(),
                )
            }
            other => ColorScale::Named(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorScale {
    Named(String),
    Stops(Vec<(f64, String)>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locationmode: &'static str,
    pub locations: Vec<&'static str>,
    pub z: Vec<u64>,
    pub text: Vec<String>,
    pub customdata: Vec<String>,
    pub hovertemplate: &'static str,
    pub colorscale: ColorScale,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub geo: Geo,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub scope: &'static str,
}

impl Figure {
    pub fn choropleth(table: &DisplayTable, title: &str, palette: Palette) -> Self {
        let rows = table.rows();
        let trace = ChoroplethTrace {
            kind: "choropleth",
            locationmode: "USA-states",
            locations: rows.iter().map(|r| r.state_code).collect(),
            z: rows.iter().map(|r| r.total_count).collect(),
            text: rows.iter().map(|r| r.state.clone()).collect(),
            customdata: rows.iter().map(|r| r.tooltip_text.clone()).collect(),
            // Name in bold, then the category breakdown; total only drives the color.
            hovertemplate: "<b>%{text}</b><br>%{customdata}<extra></extra>",
            colorscale: palette.colorscale(),
            colorbar: ColorBar {
                title: Title {
                    text: "TOTAL_COUNT".to_string(),
                },
            },
        };

        Self {
            data: vec![trace],
            layout: Layout {
                title: Title {
                    text: title.to_string(),
                },
                geo: Geo { scope: "usa" },
            },
        }
    }

    pub fn to_json(&self) -> RmResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Standalone page; the `.html` template name turns on auto-escaping and
    /// `tojson` keeps the embedded figure from closing the script block.
    pub fn to_html(&self) -> RmResult<String> {
        let mut env = Environment::new();
        env.add_template("map.html", MAP_PAGE_TMPL)?;
        let page = env.get_template("map.html")?.render(context! {
            title => &self.layout.title.text,
            figure => self,
        })?;
        Ok(page)
    }

    pub fn write_json(&self, path: &Path) -> RmResult<()> {
        fs::write(path, self.to_json()?)?;
        info!("💾 Figure JSON written to {}", path.display());
        Ok(())
    }

    pub fn write_html(&self, path: &Path) -> RmResult<()> {
        fs::write(path, self.to_html()?)?;
        info!("🗺️  Map page written to {}", path.display());
        Ok(())
    }
}
