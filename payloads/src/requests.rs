use crate::{BrandId, CompanyId, MachineId, MachineStateId, MachineTypeId};
use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;

/// Multipart field names understood by the machinery endpoints.
pub mod fields {
    pub const ID: &str = "id";
    pub const CHASSIS_NUMBER: &str = "no_chasis";
    pub const MACHINE_TYPE: &str = "tipo";
    pub const MODEL: &str = "modelo";
    pub const STATE: &str = "estado";
    pub const HOUR_METER: &str = "horometro";
    pub const COMPANY: &str = "empresa";
    pub const BRAND: &str = "marca";
    pub const IMAGE: &str = "imagen";
}

pub const DEFAULT_IMAGE_MIME: &str = "application/octet-stream";

/// An image file picked by the user, sent along with the machine data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Data sent to create or update a machine.
///
/// `id` is `None` when creating; it is then sent as an empty string, which is
/// what the backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSubmission {
    pub id: Option<MachineId>,
    pub chassis_number: String,
    pub machine_type_id: MachineTypeId,
    pub model: String,
    pub state_id: MachineStateId,
    pub hour_meter: Decimal,
    pub company_id: CompanyId,
    pub brand_id: BrandId,
    pub image: Option<ImageUpload>,
}

impl MachineSubmission {
    /// The text fields in the order they are appended to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                fields::ID,
                self.id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            (fields::CHASSIS_NUMBER, self.chassis_number.clone()),
            (fields::MACHINE_TYPE, self.machine_type_id.to_string()),
            (fields::MODEL, self.model.clone()),
            (fields::STATE, self.state_id.to_string()),
            (fields::HOUR_METER, self.hour_meter.to_string()),
            (fields::COMPANY, self.company_id.to_string()),
            (fields::BRAND, self.brand_id.to_string()),
        ]
    }

    /// Build the multipart body. The image part is only present when a file
    /// was selected. A mime type reqwest cannot parse is sent as
    /// [`DEFAULT_IMAGE_MIME`].
    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        let mut form = self
            .text_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        if let Some(ImageUpload {
            file_name,
            mime_type,
            bytes,
        }) = self.image
        {
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(sendable_mime(&mime_type))?;
            form = form.part(fields::IMAGE, part);
        }

        Ok(form)
    }
}

fn sendable_mime(mime_type: &str) -> &str {
    if Part::bytes(Vec::new()).mime_str(mime_type).is_ok() {
        mime_type
    } else {
        DEFAULT_IMAGE_MIME
    }
}
