use crate::{
    BrandId, ClientError, CompanyId, MachineId, MachineStateId, MachineTypeId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shown when the backend rejects a read without saying why.
pub const REJECTED_WITHOUT_MESSAGE: &str =
    "El servidor rechazó la solicitud sin indicar el motivo";

/// Response envelope used by every machinery endpoint.
///
/// `success=false` is a business failure reported by the server; the
/// message is meant to be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Unwrap the payload of a successful read. A rejected envelope becomes
    /// [`ClientError::Rejected`] carrying the server message, or
    /// [`REJECTED_WITHOUT_MESSAGE`] when it sent none.
    pub fn into_data(self) -> Result<Option<T>, ClientError> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| REJECTED_WITHOUT_MESSAGE.to_string());
            Err(ClientError::Rejected(message))
        }
    }
}

/// An entry of one of the lookup lists (brands, machine types, machine
/// states, companies) offered as dropdown options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem<Id> {
    pub id: Id,
    #[serde(rename = "nombre", alias = "descripcion", alias = "label")]
    pub label: String,
}

pub type Brand = ReferenceItem<BrandId>;
pub type MachineType = ReferenceItem<MachineTypeId>;
pub type MachineState = ReferenceItem<MachineStateId>;
pub type Company = ReferenceItem<CompanyId>;

/// A stored machine as returned by the backend when editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub id: MachineId,
    #[serde(rename = "no_chasis")]
    pub chassis_number: String,
    #[serde(rename = "id_tipo_maquina")]
    pub machine_type_id: MachineTypeId,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "id_estado")]
    pub state_id: MachineStateId,
    /// Cumulative operating hours.
    #[serde(rename = "horometro")]
    pub hour_meter: Decimal,
    #[serde(rename = "id_empresa")]
    pub company_id: CompanyId,
    #[serde(rename = "id_marca")]
    pub brand_id: BrandId,
    /// URL (or data URL) of the stored image.
    #[serde(rename = "imagen", default)]
    pub image_url: Option<String>,
    #[serde(rename = "imagen_nombre", default)]
    pub image_name: Option<String>,
}

/// The record lookup is answered either with a bare record or wrapped in the
/// usual envelope, depending on the backend version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MachineLookup {
    Envelope(ApiResponse<MachineRecord>),
    Bare(MachineRecord),
}

/// Reply to a create or update submission. Only the envelope flags are
/// inspected; the payload is kept opaque.
pub type SubmitReply = ApiResponse<serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn reference_item_accepts_label_aliases() {
        let brand: Brand =
            serde_json::from_str(r#"{"id": 3, "nombre": "Komatsu"}"#).unwrap();
        assert_eq!(brand.id, BrandId(3));
        assert_eq!(brand.label, "Komatsu");

        let state: MachineState =
            serde_json::from_str(r#"{"id": 1, "descripcion": "Operativa"}"#)
                .unwrap();
        assert_eq!(state.label, "Operativa");
    }

    #[test]
    fn machine_lookup_accepts_bare_and_wrapped_records() {
        let bare = r#"{
            "id": 7, "no_chasis": "CAT320-001", "id_tipo_maquina": 1,
            "modelo": "320D", "id_estado": 2, "horometro": 1250.5,
            "id_empresa": 4, "id_marca": 1
        }"#;
        let MachineLookup::Bare(record) = serde_json::from_str(bare).unwrap()
        else {
            panic!("expected a bare record");
        };
        assert_eq!(record.id, MachineId(7));
        assert_eq!(record.hour_meter, dec!(1250.5));
        assert_eq!(record.image_url, None);

        let wrapped = format!(r#"{{"success": true, "data": {bare}}}"#);
        let MachineLookup::Envelope(envelope) =
            serde_json::from_str(&wrapped).unwrap()
        else {
            panic!("expected an envelope");
        };
        assert_eq!(envelope.into_data().unwrap(), Some(record));
    }

    #[test]
    fn rejected_envelope_without_message_gets_a_fallback() {
        for body in [
            r#"{"success": false}"#,
            r#"{"success": false, "message": "  "}"#,
        ] {
            let response: ApiResponse<Vec<Brand>> =
                serde_json::from_str(body).unwrap();
            match response.into_data() {
                Err(ClientError::Rejected(message)) => {
                    assert_eq!(message, REJECTED_WITHOUT_MESSAGE)
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn rejected_envelope_carries_server_message() {
        let response: ApiResponse<Vec<Brand>> = serde_json::from_str(
            r#"{"success": false, "message": "Sin permisos"}"#,
        )
        .unwrap();
        match response.into_data() {
            Err(ClientError::Rejected(message)) => {
                assert_eq!(message, "Sin permisos")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
