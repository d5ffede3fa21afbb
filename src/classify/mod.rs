//! Exception classification
//!
//! Maps remote HDFS exceptions onto the local error vocabulary.

pub mod operations;
pub mod table;

pub use operations::{classify, classify_create};
pub use table::{classification_table, lookup};
