//! Upload file records.

use std::fmt;

/// Lifecycle status of one file in the upload list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// Transfer in progress.
    #[default]
    Uploading,
    /// Transfer finished successfully.
    Done,
    /// Transfer failed.
    Error,
    /// Removal requested and awaiting confirmation.
    Removed,
}

impl UploadStatus {
    /// Lowercase status name.
    pub fn as_str(self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Done => "done",
            UploadStatus::Error => "error",
            UploadStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file tracked by an [`UploadList`](super::UploadList).
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// Unique id. Files are matched by uid, never by name.
    pub uid: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub status: UploadStatus,
    /// Progress in `0.0..=100.0`.
    pub percent: f32,
    /// Raw server response, if any.
    pub response: Option<String>,
    /// Failure reported by the transport.
    pub error: Option<String>,
}

impl UploadFile {
    /// Create a file record with no progress.
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            size: 0,
            status: UploadStatus::default(),
            percent: 0.0,
            response: None,
            error: None,
        }
    }

    /// Set the size in bytes (builder).
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the status (builder).
    pub fn with_status(mut self, status: UploadStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_file_defaults() {
        let file = UploadFile::new("rc-1", "a.png").with_size(42);
        assert_eq!(file.uid, "rc-1");
        assert_eq!(file.size, 42);
        assert_eq!(file.status, UploadStatus::Uploading);
        assert_eq!(file.percent, 0.0);
        assert!(file.response.is_none());
        assert!(file.error.is_none());
    }

    #[test]
    fn status_names() {
        assert_eq!(UploadStatus::Done.to_string(), "done");
        assert_eq!(UploadStatus::Removed.as_str(), "removed");
    }
}
