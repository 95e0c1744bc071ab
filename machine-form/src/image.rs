use base64::{Engine as _, engine::general_purpose};
use payloads::requests::{DEFAULT_IMAGE_MIME, ImageUpload};
use uuid::Uuid;

/// Identifies one file selection so that a read finishing after a newer
/// selection can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadTicket(Uuid);

impl ReadTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReadTicket {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRead {
    ticket: ReadTicket,
    file_name: String,
    mime_type: String,
}

/// Holds at most one selected image and the preview shown for it.
///
/// In edit mode the preview starts as the stored image of the record; once a
/// file is picked and read it is replaced by a data URL of that file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImagePicker {
    preview_url: Option<String>,
    file_name: Option<String>,
    selected: Option<ImageUpload>,
    pending: Option<PendingRead>,
}

impl ImagePicker {
    /// Show the image already stored for the record being edited.
    pub fn show_stored(
        &mut self,
        url: Option<String>,
        file_name: Option<String>,
    ) {
        self.preview_url = url.filter(|url| !url.is_empty());
        self.file_name = file_name;
        self.selected = None;
        self.pending = None;
    }

    /// Start a new selection. The previous file, its preview and its name
    /// stay in place until this read completes.
    pub fn select(
        &mut self,
        ticket: ReadTicket,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) {
        let mime_type = mime_type.into();
        self.pending = Some(PendingRead {
            ticket,
            file_name: file_name.into(),
            mime_type: if mime_type.is_empty() {
                DEFAULT_IMAGE_MIME.to_string()
            } else {
                mime_type
            },
        });
    }

    /// Finish the read started with `ticket`. Returns false, leaving the
    /// picker untouched, when a newer selection superseded it.
    pub fn complete(&mut self, ticket: ReadTicket, bytes: Vec<u8>) -> bool {
        let Some(pending) =
            self.pending.take_if(|pending| pending.ticket == ticket)
        else {
            tracing::debug!("Ignoring read of a superseded image selection");
            return false;
        };

        self.preview_url = Some(data_url(&pending.mime_type, &bytes));
        self.file_name = Some(pending.file_name.clone());
        self.selected = Some(ImageUpload {
            file_name: pending.file_name,
            mime_type: pending.mime_type,
            bytes,
        });
        true
    }

    /// Abandon the read started with `ticket`, e.g. when the browser failed
    /// to read the file. Whatever was shown before the selection remains the
    /// image to submit.
    pub fn fail(&mut self, ticket: ReadTicket) {
        if self.pending.take_if(|pending| pending.ticket == ticket).is_some() {
            tracing::warn!("Image read failed");
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Name of the stored or selected file, for display.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The file to submit, if one was picked and fully read.
    pub fn selected(&self) -> Option<&ImageUpload> {
        self.selected.as_ref()
    }

    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }
}

/// Encode file contents the way `FileReader.readAsDataURL` does.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        DEFAULT_IMAGE_MIME
    } else {
        mime_type
    };
    format!(
        "data:{mime_type};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}
