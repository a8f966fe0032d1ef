use std::path::{Path, PathBuf};

use hx_project::{ProjectError, evaluate_file, load_yaml};
use hx_sink::SinkError;

fn designs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../designs")
}

#[test]
fn bundled_designs_load_and_evaluate() {
    for name in ["01_cpu_cooler.yaml", "02_custom_materials.yaml"] {
        let path = designs_dir().join(name);
        load_yaml(&path).unwrap_or_else(|e| panic!("Failed to load {name}: {e}"));
        let eval =
            evaluate_file(&path).unwrap_or_else(|e| panic!("Failed to evaluate {name}: {e}"));
        assert!(!eval.sinks.is_empty());
        for sink in &eval.sinks {
            assert!(sink.heat_rate.total_w > 0.0, "{name}/{}", sink.id);
            assert!(sink.report.efficiency > 0.0 && sink.report.efficiency <= 1.0);
        }
    }
}

#[test]
fn cpu_cooler_advisor_runs() {
    let eval = evaluate_file(&designs_dir().join("01_cpu_cooler.yaml")).unwrap();
    let advice = eval.advisor.expect("design has an advisor block");
    assert_eq!(advice.len(), 6);
    assert!(advice.windows(2).all(|w| w[1].length_m < w[0].length_m));
    assert!(advice.iter().all(|s| s.reference_table.is_some()));
}

#[test]
fn custom_table_material_resolves() {
    let eval = evaluate_file(&designs_dir().join("02_custom_materials.yaml")).unwrap();
    let sink = &eval.sinks[0];
    // 6063 at 330 K: 209 + 0.3 * (215 - 209)
    assert!((sink.report.conductivity_w_mk - 210.8).abs() < 1e-9);
}

#[test]
fn unknown_material_surfaces_at_evaluation() {
    let dir = std::env::temp_dir().join(format!("hx_project_unknown_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("design.yaml");
    std::fs::write(
        &path,
        r#"
version: 1
conditions:
  base_temperature_k: 350.0
  ambient_temperature_k: 300.0
sinks:
  - id: s
    profile: rectangular
    material: Unobtainium
    h_w_m2k: 10.0
    fin_count: 1
    fin_length_m: 0.02
    fin_width_m: 0.05
    fin_thickness_m: 0.001
    base_height_m: 0.01
"#,
    )
    .unwrap();

    let err = evaluate_file(&path).unwrap_err();
    assert!(
        matches!(err, ProjectError::Sink(SinkError::Material(_))),
        "{err}"
    );
    std::fs::remove_dir_all(&dir).ok();
}
