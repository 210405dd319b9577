//! Dataset records and their CSV persistence.
//!
//! - [`record`]: raw and processed row types
//! - [`loader`]: CSV readers
//! - [`writer`]: staged, all-or-nothing output
//! - [`splitter`]: seeded train/test split

pub mod loader;
pub mod record;
pub mod splitter;
pub mod writer;

pub use loader::{load_processed, load_records};
pub use record::{ProcessedRecord, RAW_HEADER, Record};
pub use splitter::train_test_split;
pub use writer::StagedOutput;
