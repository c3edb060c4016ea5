use clap::Parser;
use stresstrend_lib::chart::{annotate, palette, render_to_file};
use stresstrend_lib::error::ChartError;
use stresstrend_lib::fetch::decode_body;
use stresstrend_lib::lookup::{lookup, ImageLookup};
use stresstrend_lib::models::{Emotion, StressSeries};
use stresstrend_lib::{prepare_session, Cli};

const TWO_DAY_BODY: &str = r#"{
    "dates": ["2024-01-01", "2024-01-02"],
    "stress_levels": ["0.2", "0.8"],
    "emotions": ["Happy", "Angry"],
    "image_data": ["/a.png", "/b.png"]
}"#;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn two_point_payload_charts_with_padded_bounds() {
    let series = decode_body(TWO_DAY_BODY).unwrap();
    assert_eq!(series.len(), 2);

    let chart = annotate(&series).unwrap();
    assert!(close(chart.y_bounds.min, 0.1));
    assert!(close(chart.y_bounds.max, 0.9));

    let legend: Vec<(String, &str)> = chart
        .legend
        .iter()
        .map(|entry| (entry.emotion.to_string(), entry.color.name))
        .collect();
    assert_eq!(
        legend,
        vec![("Happy".to_string(), "green"), ("Angry".to_string(), "red")]
    );
}

#[test]
fn absent_date_has_no_image() {
    let series = decode_body(TWO_DAY_BODY).unwrap();
    assert_eq!(lookup("2024-01-05", &series), ImageLookup::NotFound);
    assert_eq!(lookup("2024-01-01", &series), ImageLookup::Found("/a.png"));
}

#[test]
fn unknown_emotion_is_legended_once_with_fallback() {
    let body = r#"{
        "dates": ["2024-01-01", "2024-01-02", "2024-01-03"],
        "stress_levels": [0.4, 0.5, 0.6],
        "emotions": ["Unknown", "Sad", "Unknown"],
        "image_data": ["/a.png", "/b.png", "/c.png"]
    }"#;
    let series = decode_body(body).unwrap();
    let chart = annotate(&series).unwrap();

    let unknown: Vec<_> = chart
        .legend
        .iter()
        .filter(|entry| entry.emotion == Emotion::Other("Unknown".into()))
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].color, palette::FALLBACK_COLOR);
    assert_eq!(chart.legend.len(), 2);
}

#[test]
fn empty_payload_yields_no_session() {
    let body = r#"{"dates": [], "stress_levels": [], "emotions": [], "image_data": []}"#;
    let series = decode_body(body).unwrap();
    assert!(series.is_empty());
    assert!(matches!(annotate(&series), Err(ChartError::NoData)));

    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("chart.png");
    let session = prepare_session(Some(series), &chart_path, (800, 600)).unwrap();
    assert!(session.is_none());
    assert!(!chart_path.exists());
}

#[test]
fn failed_fetch_yields_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("chart.png");
    let session = prepare_session(None, &chart_path, (800, 600)).unwrap();
    assert!(session.is_none());
    assert!(!chart_path.exists());
}

#[test]
fn every_date_round_trips_to_its_image() {
    let series: StressSeries = decode_body(TWO_DAY_BODY).unwrap();
    for record in &series {
        assert_eq!(
            lookup(&record.formatted_date(), &series).image_ref(),
            Some(record.image_ref.as_str())
        );
    }
}

#[test]
fn cli_requires_integer_user_id() {
    let cli = Cli::try_parse_from(["stresstrend", "42"]).unwrap();
    assert_eq!(cli.user_id, 42);
    assert!(cli.config.is_none());

    assert!(Cli::try_parse_from(["stresstrend"]).is_err());
    assert!(Cli::try_parse_from(["stresstrend", "abc"]).is_err());
    assert!(Cli::try_parse_from(["stresstrend", "1", "2"]).is_err());
    assert!(Cli::try_parse_from(["stresstrend", "1.5"]).is_err());
}

#[test]
fn cli_accepts_negative_user_id() {
    let cli = Cli::try_parse_from(["stresstrend", "-5"]).unwrap();
    assert_eq!(cli.user_id, -5);
}

#[test]
fn cli_accepts_output_and_config() {
    let cli = Cli::try_parse_from([
        "stresstrend",
        "--config",
        "conf.json",
        "--output",
        "chart.svg",
        "--no-viewer",
        "7",
    ])
    .unwrap();
    assert_eq!(cli.user_id, 7);
    assert_eq!(cli.output.unwrap().to_str(), Some("chart.svg"));
    assert!(cli.no_viewer);
}

fn assert_non_empty_file(path: &std::path::Path) {
    let meta = std::fs::metadata(path).unwrap();
    assert!(meta.len() > 0, "{} is empty", path.display());
}

#[test]
fn two_point_payload_renders_session_and_chart_files() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("chart.png");
    let series = decode_body(TWO_DAY_BODY).unwrap();

    let session = prepare_session(Some(series.clone()), &png, (800, 600))
        .unwrap()
        .expect("session");
    assert_eq!(session.series().len(), 2);
    assert_non_empty_file(&png);

    let svg = dir.path().join("chart.svg");
    render_to_file(&annotate(&series).unwrap(), &svg, (800, 600)).unwrap();
    assert_non_empty_file(&svg);
}

#[test]
fn single_record_chart_renders() {
    let body = r#"{
        "dates": ["2024-01-01"],
        "stress_levels": [0.5],
        "emotions": ["Neutral"],
        "image_data": ["/a.png"]
    }"#;
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("single.svg");
    let chart = annotate(&decode_body(body).unwrap()).unwrap();

    render_to_file(&chart, &svg, (800, 600)).unwrap();
    assert_non_empty_file(&svg);
}
