use repoviz::core::resolver::{normalize_path, ImportResolver};

fn resolver(paths: &[&str]) -> ImportResolver {
    ImportResolver::new(paths.iter().copied())
}

#[test]
fn sibling_specifier_resolves_with_extension_probe() {
    let r = resolver(&["src/main.ts", "src/util.ts"]);
    assert_eq!(r.resolve("./util", "src/main.ts").as_deref(), Some("src/util.ts"));
}

#[test]
fn non_relative_specifiers_are_external() {
    let r = resolver(&["react.ts", "src/main.ts", "src/util.ts"]);
    assert_eq!(r.resolve("react", "src/main.ts"), None);
    assert_eq!(r.resolve("@scope/pkg", "src/main.ts"), None);
    assert_eq!(r.resolve("/src/util", "src/main.ts"), None);
}

#[test]
fn parent_segments_are_normalized() {
    let r = resolver(&["src/app/main.ts", "src/shared/config.ts"]);
    assert_eq!(
        r.resolve("../shared/config", "src/app/main.ts").as_deref(),
        Some("src/shared/config.ts")
    );
    assert_eq!(
        r.resolve("./../shared/./config", "src/app/main.ts").as_deref(),
        Some("src/shared/config.ts")
    );
}

#[test]
fn explicit_extension_is_tested_directly() {
    let r = resolver(&["src/a.js", "src/a.js.ts"]);
    assert_eq!(r.resolve("./a.js", "src/main.ts").as_deref(), Some("src/a.js"));

    let r = resolver(&["src/a.js.ts"]);
    assert_eq!(r.resolve("./a.js", "src/main.ts"), None);
}

#[test]
fn extension_precedence_beats_index_files() {
    let r = resolver(&["lib/utils.tsx", "lib/utils.js", "lib/utils/index.ts"]);
    assert_eq!(r.resolve("./utils", "lib/main.ts").as_deref(), Some("lib/utils.tsx"));

    let r = resolver(&["lib/utils/index.jsx", "lib/utils/index.js"]);
    assert_eq!(
        r.resolve("./utils", "lib/main.ts").as_deref(),
        Some("lib/utils/index.js")
    );
}

#[test]
fn top_level_files_resolve_against_the_root() {
    let r = resolver(&["a.ts", "b.ts"]);
    assert_eq!(r.resolve("./b", "a.ts").as_deref(), Some("b.ts"));
}

#[test]
fn unmatched_relative_specifier_is_none() {
    let r = resolver(&["src/main.ts"]);
    assert_eq!(r.resolve("./missing", "src/main.ts"), None);
    assert_eq!(r.resolve("./styles.css", "src/main.ts"), None);
}

#[test]
fn normalize_drops_leading_slash_and_excess_parents() {
    assert_eq!(normalize_path("/abs/./x/../y"), "abs/y");
    assert_eq!(normalize_path("a/../../b"), "b");
}
