//! File-list state of an upload widget.
//!
//! Only the list bookkeeping lives here. The transport that produces start,
//! progress, success and error events is supplied by the caller.

pub mod file;
pub mod list;

pub use file::{UploadFile, UploadStatus};
pub use list::{DragState, UploadChange, UploadList};
