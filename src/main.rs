use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use repoviz::config::RepovizConfig;
use repoviz::core::{
    detect_drift, find_cycles, validate_files, AnalysisResult, FileScanner, ProjectAnalyzer,
};
use repoviz::formatters::{read_snapshot, render_report, snapshot, write_snapshot, MermaidRenderer};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "repoviz",
    version,
    author = "repoviz developers",
    about = "Import dependency graphs and architecture drift for TypeScript/JavaScript projects"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Analyze a directory and write a snapshot
    Analyze(AnalyzeArgs),
    /// Compare a snapshot against a newer snapshot or a directory
    Drift(DriftArgs),
}

#[derive(Debug, Clone, Args)]
struct AnalyzeArgs {
    /// Input directory to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Snapshot output file (defaults to the configured snapshot path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also write the Mermaid diagram to this file
    #[arg(short, long, value_name = "FILE")]
    diagram: Option<PathBuf>,

    /// Configuration file (defaults to <input>/repoviz.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct DriftArgs {
    /// Earlier snapshot
    #[arg(short, long, value_name = "FILE")]
    previous: PathBuf,

    /// Newer snapshot
    #[arg(long, value_name = "FILE", conflicts_with = "input", required_unless_present = "input")]
    current: Option<PathBuf>,

    /// Directory to analyze as the newer side
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Write the drift result as JSON
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the Markdown report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Configuration file (defaults to <input>/repoviz.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Drift(args) => run_drift(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("REPOVIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn analyze_directory(input: &Path, config: &RepovizConfig) -> Result<AnalysisResult> {
    let scanner = FileScanner::with_exclude_patterns(config.scan.exclude.clone());
    let files = scanner.scan_directory(input)?;
    println!("Found {} files to analyze", files.len());

    validate_files(&files)?;

    let analysis_start = Instant::now();
    let result = ProjectAnalyzer::new().analyze_project(&files)?;
    info!(
        files = result.files.len(),
        elapsed_ms = analysis_start.elapsed().as_millis() as u64,
        "analysis complete"
    );
    Ok(result)
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let AnalyzeArgs {
        input,
        output,
        diagram,
        config,
    } = args;

    let start_time = Instant::now();
    let config = RepovizConfig::discover(config.as_deref(), Some(input.as_path()))?;

    println!("REPOVIZ - Dependency Analysis");
    println!("Input: {}", input.display());

    let result = analyze_directory(&input, &config)?;

    let output = output.unwrap_or_else(|| PathBuf::from(&config.output.snapshot));
    write_snapshot(&output, &result)?;
    println!("Snapshot: {}", output.display());

    if let Some(diagram) = diagram {
        MermaidRenderer::new().format_to_file(&result.graph, &diagram)?;
        println!("Diagram: {}", diagram.display());
    }

    let edges: usize = result.graph.iter().map(|node| node.dependencies.len()).sum();
    let cycles = find_cycles(&result.graph);
    println!(
        "Files: {}, dependencies: {}, import cycles: {}",
        result.graph.len(),
        edges,
        cycles.len()
    );
    for cycle in &cycles {
        println!("  cycle: {}", cycle.join(" <-> "));
    }

    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn run_drift(args: DriftArgs) -> Result<()> {
    let DriftArgs {
        previous,
        current,
        input,
        output,
        report,
        config,
    } = args;

    let previous_snapshot = read_snapshot(&previous)?;

    let current_snapshot = match (current, input) {
        (Some(current), _) => read_snapshot(&current)?,
        (None, Some(input)) => {
            let config = RepovizConfig::discover(config.as_deref(), Some(input.as_path()))?;
            analyze_directory(&input, &config)?
        }
        (None, None) => anyhow::bail!("either --current or --input is required"),
    };

    let drift = detect_drift(&current_snapshot, &previous_snapshot);
    info!(
        added = drift.added.len(),
        removed = drift.removed.len(),
        modified = drift.modified.len(),
        "drift detection complete"
    );

    if let Some(output) = output {
        snapshot::write_json(&output, &drift)?;
        println!("Drift JSON: {}", output.display());
    }

    let text = render_report(&drift);
    match report {
        Some(report) => {
            std::fs::write(&report, &text)
                .with_context(|| format!("failed to write report to {}", report.display()))?;
            println!("Report: {}", report.display());
        }
        None => println!("{text}"),
    }

    Ok(())
}
