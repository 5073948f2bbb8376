use repoviz::core::graph::{find_cycles, to_petgraph, DependencyNode, GraphBuilder};
use repoviz::core::ImportResolver;
use repoviz::parsers::{ImportInfo, ParsedFile};

fn parsed(path: &str, sources: &[&str]) -> ParsedFile {
    ParsedFile {
        path: path.to_string(),
        exports: Vec::new(),
        imports: sources
            .iter()
            .map(|source| ImportInfo {
                source: source.to_string(),
                specifiers: Vec::new(),
            })
            .collect(),
    }
}

#[test]
fn graph_builder_resolves_and_deduplicates() {
    let resolver = ImportResolver::new(["src/a.ts", "src/b.ts", "src/c/index.ts"]);
    let mut builder = GraphBuilder::new(resolver);

    builder.add_file(&parsed(
        "src/a.ts",
        &["./b", "./c", "./b.ts", "react", "./missing"],
    ));
    builder.add_file(&parsed("src/b.ts", &[]));
    builder.add_file(&parsed("src/c/index.ts", &["../a"]));

    assert_eq!(builder.unresolved_count(), 2);
    assert_eq!(builder.edge_count(), 3);

    let graph = builder.build();
    assert_eq!(
        graph,
        vec![
            DependencyNode::new("src/a.ts").with_dependencies(["src/b.ts", "src/c/index.ts"]),
            DependencyNode::new("src/b.ts"),
            DependencyNode::new("src/c/index.ts").with_dependencies(["src/a.ts"]),
        ]
    );
    assert!(graph.iter().all(|node| node.id == node.path));
}

#[test]
fn cycles_are_reported_sorted() {
    let graph = vec![
        DependencyNode::new("a.ts").with_dependencies(["b.ts"]),
        DependencyNode::new("b.ts").with_dependencies(["a.ts"]),
        DependencyNode::new("c.ts").with_dependencies(["c.ts"]),
        DependencyNode::new("d.ts").with_dependencies(["a.ts"]),
    ];

    assert_eq!(
        find_cycles(&graph),
        vec![
            vec!["a.ts".to_string(), "b.ts".to_string()],
            vec!["c.ts".to_string()],
        ]
    );
}

#[test]
fn petgraph_view_skips_unknown_targets() {
    let graph = vec![
        DependencyNode::new("a.ts").with_dependencies(["b.ts", "gone.ts"]),
        DependencyNode::new("b.ts"),
    ];
    let view = to_petgraph(&graph);
    assert_eq!(view.node_count(), 2);
    assert_eq!(view.edge_count(), 1);
    assert!(find_cycles(&graph).is_empty());
}
