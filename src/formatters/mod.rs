pub mod drift_report;
pub mod mermaid;
pub mod snapshot;

pub use drift_report::render_report;
pub use mermaid::MermaidRenderer;
pub use snapshot::{read_snapshot, write_snapshot, SnapshotError};
