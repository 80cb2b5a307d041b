//! Upload list state machine.

use log::debug;

use super::file::{UploadFile, UploadStatus};

/// Drag-and-drop hover state of a drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Drop,
    DragOver,
    DragLeave,
}

/// Change notification: the affected file and the whole list after the change.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadChange {
    pub file: UploadFile,
    pub file_list: Vec<UploadFile>,
}

/// Ordered list of files handled by an upload widget.
#[derive(Debug, Clone, Default)]
pub struct UploadList {
    files: Vec<UploadFile>,
    drag_state: DragState,
    disabled: bool,
}

impl UploadList {
    /// Create a list seeded with `files`.
    pub fn new(files: Vec<UploadFile>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    /// Set the disabled flag (builder). A disabled list accepts no new
    /// uploads and no removals.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn get(&self, uid: &str) -> Option<&UploadFile> {
        self.files.iter().find(|f| f.uid == uid)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether any file is still uploading.
    pub fn is_uploading(&self) -> bool {
        self.files.iter().any(|f| f.status == UploadStatus::Uploading)
    }

    pub fn set_drag_state(&mut self, state: DragState) {
        self.drag_state = state;
    }

    /// A transfer started. The file replaces an entry with the same uid or is
    /// appended.
    pub fn start(&mut self, mut file: UploadFile) -> Option<UploadChange> {
        if self.disabled {
            debug!("upload of `{}` ignored: list disabled", file.uid);
            return None;
        }
        file.status = UploadStatus::Uploading;
        match self.position(&file.uid) {
            Some(index) => self.files[index] = file.clone(),
            None => self.files.push(file.clone()),
        }
        Some(self.change(file))
    }

    /// Progress update. `None` when the file has been removed meanwhile.
    pub fn progress(&mut self, uid: &str, percent: f32) -> Option<UploadChange> {
        self.update(uid, |file| file.percent = percent.clamp(0.0, 100.0))
    }

    /// Transfer succeeded.
    pub fn success(&mut self, uid: &str, response: Option<String>) -> Option<UploadChange> {
        self.update(uid, |file| {
            file.status = UploadStatus::Done;
            file.response = response;
        })
    }

    /// Transfer failed.
    pub fn error(
        &mut self,
        uid: &str,
        error: impl Into<String>,
        response: Option<String>,
    ) -> Option<UploadChange> {
        let error = error.into();
        self.update(uid, |file| {
            file.status = UploadStatus::Error;
            file.error = Some(error);
            file.response = response;
        })
    }

    /// A before-upload check rejected `batch`. The rejected files still join
    /// the list, deduplicated by uid with existing entries winning.
    ///
    /// The change names the first rejected file; an empty batch changes
    /// nothing.
    pub fn reject(&mut self, batch: Vec<UploadFile>) -> Option<UploadChange> {
        let first = batch.first()?.clone();
        for file in batch {
            if self.position(&file.uid).is_none() {
                self.files.push(file);
            }
        }
        Some(self.change(first))
    }

    /// Remove `uid`, asking `confirm` first. While `confirm` runs the file is
    /// marked [`UploadStatus::Removed`]; a `false` answer restores the status
    /// and keeps the file.
    pub fn remove<F>(&mut self, uid: &str, confirm: F) -> Option<UploadChange>
    where
        F: FnOnce(&UploadFile) -> bool,
    {
        if self.disabled {
            debug!("removal of `{uid}` ignored: list disabled");
            return None;
        }
        let index = self.position(uid)?;
        let previous = self.files[index].status;
        self.files[index].status = UploadStatus::Removed;

        if !confirm(&self.files[index]) {
            debug!("removal of `{uid}` vetoed");
            self.files[index].status = previous;
            return None;
        }
        let file = self.files.remove(index);
        Some(self.change(file))
    }

    fn position(&self, uid: &str) -> Option<usize> {
        self.files.iter().position(|f| f.uid == uid)
    }

    fn update<F>(&mut self, uid: &str, apply: F) -> Option<UploadChange>
    where
        F: FnOnce(&mut UploadFile),
    {
        let Some(index) = self.position(uid) else {
            debug!("event for `{uid}` ignored: file no longer listed");
            return None;
        };
        apply(&mut self.files[index]);
        let file = self.files[index].clone();
        Some(self.change(file))
    }

    fn change(&self, file: UploadFile) -> UploadChange {
        debug!("upload `{}` is {}", file.uid, file.status);
        UploadChange {
            file,
            file_list: self.files.clone(),
        }
    }
}
