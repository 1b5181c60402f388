pub mod error;
pub mod progress;
pub mod vocabulary;

pub use error::LoadError;
pub use progress::ProgressTracker;
pub use vocabulary::RecordStore;
