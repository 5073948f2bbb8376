use repoviz::core::FileScanner;
use repoviz::Language;
use std::fs;

#[test]
fn scanner_collects_sources_with_relative_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/components")).unwrap();
    fs::create_dir_all(root.join("node_modules/react")).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();

    fs::write(root.join("src/main.ts"), "import './components/App';").unwrap();
    fs::write(root.join("src/components/App.tsx"), "export const App = 1;").unwrap();
    fs::write(root.join("src/legacy.js"), "export var x = 1;").unwrap();
    fs::write(root.join("src/styles.css"), "body {}").unwrap();
    fs::write(root.join("node_modules/react/index.js"), "module.exports = {};").unwrap();
    fs::write(root.join("dist/main.js"), "").unwrap();

    let files = FileScanner::new().scan_directory(root).unwrap();
    let summary: Vec<(&str, Language)> = files
        .iter()
        .map(|f| (f.path.as_str(), f.language))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("src/components/App.tsx", Language::TypeScript),
            ("src/legacy.js", Language::JavaScript),
            ("src/main.ts", Language::TypeScript),
        ]
    );
    assert_eq!(files[2].content, "import './components/App';");
}

#[test]
fn custom_exclude_patterns_replace_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("generated")).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("generated/api.ts"), "").unwrap();
    fs::write(root.join("dist/out.js"), "").unwrap();

    let files = FileScanner::with_exclude_patterns(vec!["generated".to_string()])
        .scan_directory(root)
        .unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "dist/out.js");
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# hi").unwrap();
    assert!(FileScanner::new().scan_directory(dir.path()).is_err());
}
