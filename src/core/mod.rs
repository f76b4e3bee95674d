//! Core building blocks shared by the extractors, the driver and the store
//!
//! - `record`: flat records and scalar cells
//! - `path`: explicit optional-field lookup into JSON
//! - `rename`: API field name -> display name
//! - `normalize`: records -> column-ordered tables
//! - `retry`: bounded retry policy for transient failures

pub mod normalize;
pub mod path;
pub mod record;
pub mod rename;
pub mod retry;

pub use normalize::{normalize, update_cols, Table};
pub use path::{lookup, Seg};
pub use record::{FlatRecord, Scalar};
pub use rename::{RenameMap, FIELD_RENAMES};
pub use retry::{retry_async, RetryPolicy};
