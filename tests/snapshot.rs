use repoviz::core::{detect_drift, AnalysisResult};
use repoviz::formatters::snapshot::{from_json, read_snapshot, to_json, write_snapshot, SnapshotError};
use repoviz::FileInput;
use serde_json::{json, Value};

fn sample() -> AnalysisResult {
    repoviz::analyze_project(&[
        FileInput::typescript("src/a.ts", "import { b } from './b';\nexport function a() {}"),
        FileInput::typescript("src/b.ts", "export type B = number;\nexport const b = 1;"),
    ])
    .unwrap()
}

#[test]
fn snapshot_json_shape_is_stable() {
    let v: Value = serde_json::from_str(&to_json(&sample()).unwrap()).unwrap();
    let expected = json!({
        "files": [
            {
                "path": "src/a.ts",
                "exports": [{"name": "a", "type": "function"}],
                "imports": [{"source": "./b", "specifiers": ["b"]}]
            },
            {
                "path": "src/b.ts",
                "exports": [
                    {"name": "B", "type": "type"},
                    {"name": "b", "type": "variable"}
                ],
                "imports": []
            }
        ],
        "graph": [
            {"id": "src/a.ts", "path": "src/a.ts", "dependencies": ["src/b.ts"]},
            {"id": "src/b.ts", "path": "src/b.ts", "dependencies": []}
        ],
        "mermaid": "graph LR\n  N0[\"a.ts\"]\n  N1[\"b.ts\"]\n  N0 --> N1"
    });
    assert_eq!(v, expected);
}

#[test]
fn snapshot_file_round_trips() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let original = sample();

    write_snapshot(&path, &original).unwrap();
    let restored = read_snapshot(&path).unwrap();
    assert_eq!(restored, original);
    assert!(detect_drift(&restored, &original).is_empty());
}

#[test]
fn drift_json_omits_absent_sides() {
    let previous = sample();
    let mut current = sample();
    current.graph.pop();

    let drift = detect_drift(&current, &previous);
    let v: Value = serde_json::from_str(&to_json(&drift).unwrap()).unwrap();
    assert_eq!(
        v,
        json!({
            "added": [],
            "removed": ["src/b.ts"],
            "modified": [],
            "changes": [
                {"path": "src/b.ts", "changeType": "removed", "before": {"dependencies": []}}
            ]
        })
    );
}

#[test]
fn snapshots_from_other_producers_are_accepted() {
    let json = r#"{
        "files": [],
        "graph": [{"id": "a.ts", "path": "a.ts", "dependencies": ["b.ts"]}],
        "mermaid": ""
    }"#;
    let snapshot: AnalysisResult = from_json(json).unwrap();
    assert_eq!(snapshot.graph[0].dependencies, vec!["b.ts"]);
}

#[test]
fn missing_and_malformed_snapshots_are_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        read_snapshot(&missing),
        Err(SnapshotError::Read { .. })
    ));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{\"graph\": 3}").unwrap();
    assert!(matches!(read_snapshot(&bad), Err(SnapshotError::Json(_))));
}
