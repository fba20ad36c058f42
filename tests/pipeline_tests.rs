mod common;

use common::{table, ScriptedExecutor};
use ratemap::error::RateMapError;
use ratemap::figure::{ColorScale, Palette, DEFAULT_TITLE};
use ratemap::pipeline::{refresh, select_rate};
use ratemap::warehouse::Value;
use serde_json::Value as Json;

fn sample_exec() -> ScriptedExecutor {
    ScriptedExecutor::with_counts(&[
        ("California", "Imaging", 10),
        ("California", "Lab", 4),
        ("Guam", "Lab", 7),
        ("Texas", "A", 3),
        ("Texas", "B", 5),
    ])
}

#[test]
fn test_refresh_builds_table_and_figure() {
    let mut exec = sample_exec();
    let view = refresh(&mut exec, &table(), DEFAULT_TITLE, Palette::Turbo).unwrap();

    assert_eq!(view.state_options(), vec!["California", "Texas"]);

    let trace = &view.figure.data[0];
    assert_eq!(trace.kind, "choropleth");
    assert_eq!(trace.locationmode, "USA-states");
    assert_eq!(trace.locations, vec!["CA", "TX"]);
    assert_eq!(trace.z, vec![14, 8]);
    assert_eq!(trace.text, vec!["California", "Texas"]);
    assert_eq!(trace.customdata[1], "A: 3<br>B: 5");
    assert!(matches!(trace.colorscale, ColorScale::Stops(_)));
    assert_eq!(view.figure.layout.title.text, DEFAULT_TITLE);
    assert_eq!(view.figure.layout.geo.scope, "usa");

    assert_eq!(exec.seen.len(), 1);
    assert!(exec.seen[0].params.is_empty());
}

#[test]
fn test_empty_warehouse_renders_empty_map() {
    let mut exec = ScriptedExecutor::default();
    let view = refresh(&mut exec, &table(), DEFAULT_TITLE, Palette::Viridis).unwrap();
    assert!(view.table.is_empty());
    assert!(view.figure.data[0].locations.is_empty());

    let json: Json = serde_json::from_str(&view.figure.to_json().unwrap()).unwrap();
    assert_eq!(json["data"][0]["locations"], Json::Array(vec![]));
    assert_eq!(json["data"][0]["colorscale"], "Viridis");
}

#[test]
fn test_selection_flows_into_rate_lookup() {
    let mut exec = sample_exec().rate(Value::Float(250.5));
    let view = refresh(&mut exec, &table(), DEFAULT_TITLE, Palette::Turbo).unwrap();

    assert!(view.table.select("Guam").is_none());

    let state = view.table.select("Texas").unwrap();
    let rate = select_rate(&mut exec, &table(), state).unwrap();
    assert_eq!(rate.render(), "Average Negotiated Rate for Texas: $250.50");
    assert_eq!(exec.seen.len(), 2);
}

#[test]
fn test_connection_failure_aborts_refresh() {
    let mut exec =
        ScriptedExecutor::failing(|| RateMapError::Connection("refused".to_string()));
    let err = refresh(&mut exec, &table(), DEFAULT_TITLE, Palette::Turbo).unwrap_err();
    assert!(matches!(err, RateMapError::Connection(_)));
    assert_eq!(exec.seen.len(), 1);
}

#[test]
fn test_malformed_rows_abort_refresh() {
    let mut exec = ScriptedExecutor {
        category_rows: vec![vec![Value::Text("Texas".into()), Value::Int(3)]],
        ..Default::default()
    };
    let err = refresh(&mut exec, &table(), DEFAULT_TITLE, Palette::Turbo).unwrap_err();
    assert!(matches!(err, RateMapError::Shape(_)));
}

#[test]
fn test_html_page_embeds_figure_safely() {
    let mut exec = ScriptedExecutor::with_counts(&[("Texas", "</script><b>", 1)]);
    let view = refresh(&mut exec, &table(), "Counts & <Rates>", Palette::Turbo).unwrap();
    let html = view.figure.to_html().unwrap();

    assert!(html.contains("<title>Counts &amp; &lt;Rates&gt;</title>"));
    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("\\u003c/script\\u003e\\u003cb\\u003e"));
    assert_eq!(html.matches("</script>").count(), 2);
}

#[test]
fn test_figure_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut exec = sample_exec();
    let view = refresh(&mut exec, &table(), DEFAULT_TITLE, Palette::Turbo).unwrap();

    let json_path = dir.path().join("map.json");
    let html_path = dir.path().join("map.html");
    view.figure.write_json(&json_path).unwrap();
    view.figure.write_html(&html_path).unwrap();

    let json: Json = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["data"][0]["z"][0], 14);
    assert!(std::fs::read_to_string(&html_path)
        .unwrap()
        .contains("Plotly.newPlot"));
}
