pub mod analyzer;
pub mod drift;
pub mod error;
pub mod graph;
pub mod resolver;
pub mod scanner;
pub mod validation;

pub use analyzer::{analyze_project, AnalysisResult, ProjectAnalyzer, ProjectGraph};
pub use drift::{detect_drift, ChangeType, DependencySnapshot, DriftDetector, DriftResult, FileChange};
pub use error::{ParseCause, ParseError, ValidationError};
pub use graph::{find_cycles, DependencyNode, GraphBuilder};
pub use resolver::ImportResolver;
pub use scanner::FileScanner;
pub use validation::validate_files;
