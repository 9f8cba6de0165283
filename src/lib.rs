// SoundWrench Core - Vehicle Sound Diagnosis Engine
// Heuristic acoustic analysis of short engine-noise clips

// Module declarations
pub mod analysis;
pub mod config;
pub mod decode;
pub mod error;
pub mod history;
pub mod report;
pub mod session;

// Re-exports for convenience
pub use analysis::classifier::{classify, Diagnosis, Urgency};
pub use analysis::features::{extract, Features};
pub use analysis::{analyze, AnalysisReport};
pub use decode::DecodedClip;
pub use error::AnalysisError;
pub use session::AnalysisSession;

/// Initialize logging for the CLI binary
pub fn init_logging() {
    env_logger::init();
}
