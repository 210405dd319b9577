//! Record-level preprocessing: duplicate removal and label encoding.

pub mod dedup;
pub mod label_encoder;

pub use dedup::deduplicate;
pub use label_encoder::{FittedLabelEncoder, LabelEncoder};
