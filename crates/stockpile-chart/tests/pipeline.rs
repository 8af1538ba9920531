// File: crates/stockpile-chart/tests/pipeline.rs
// Purpose: Full runs against a scratch project root.

use std::path::PathBuf;

use stockpile_chart::{build_spec, resolve_root, run};
use stockpile_core::{PathsConfig, StockpileError};

const CSV: &str = "Entity,Code,Year,Number of nuclear warheads\n\
United States,USA,1950,300\n\
Germany,DEU,1950,0\n\
Russia,RUS,1950,5\n\
World,OWID_WRL,1950,305\n";

fn project(name: &str, with_csv: bool, with_output_dir: bool) -> PathsConfig {
    let root = PathBuf::from("target/test_out/pipeline").join(name);
    let _ = std::fs::remove_dir_all(&root);
    let cfg = PathsConfig::from_root(&root);
    if with_csv {
        let input = cfg.input_csv();
        std::fs::create_dir_all(input.parent().unwrap()).unwrap();
        std::fs::write(&input, CSV).unwrap();
    }
    if with_output_dir {
        std::fs::create_dir_all(&cfg.visualizations_dir).unwrap();
    }
    cfg
}

#[test]
fn writes_chart_to_visualizations_dir() {
    let cfg = project("ok", true, true);
    let out = run(&cfg).expect("pipeline");
    assert_eq!(out, cfg.output_html());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn spec_keeps_sample_rows_in_order() {
    let cfg = project("spec", true, false);
    let spec = build_spec(&cfg.input_csv()).expect("spec");
    let entities: Vec<&str> = spec.data.iter().map(|r| r.entity.as_str()).collect();
    assert_eq!(entities, vec!["United States", "Russia", "World"]);
}

#[test]
fn rerun_produces_identical_document() {
    let cfg = project("rerun", true, true);
    let first = std::fs::read(run(&cfg).unwrap()).unwrap();
    let second = std::fs::read(run(&cfg).unwrap()).unwrap();
    assert_eq!(first, second);

    let a = build_spec(&cfg.input_csv()).unwrap().to_json().unwrap();
    let b = build_spec(&cfg.input_csv()).unwrap().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_input_fails_with_data_load() {
    let cfg = project("no-input", false, true);
    let err = run(&cfg).unwrap_err();
    let cause = err.downcast_ref::<StockpileError>().expect("stockpile error in chain");
    assert!(matches!(cause, StockpileError::DataLoad { .. }));
    assert!(!cfg.output_html().exists());
}

#[test]
fn missing_output_dir_fails_with_render() {
    let cfg = project("no-output-dir", true, false);
    let err = run(&cfg).unwrap_err();
    let cause = err.downcast_ref::<StockpileError>().expect("stockpile error in chain");
    assert!(matches!(cause, StockpileError::Render { .. }));
}

#[test]
fn root_resolution_order() {
    assert_eq!(resolve_root(Some("a".into()), Some("b".into())), PathBuf::from("a"));
    assert_eq!(resolve_root(None, Some("b".into())), PathBuf::from("b"));
    assert_eq!(resolve_root(None, None), PathBuf::from("."));
    assert_eq!(resolve_root(Some("  ".into()), None), PathBuf::from("."));
}
