use crate::{
    Brand, Company, MachineId, MachineRecord, MachineState, MachineType,
    requests::MachineSubmission,
    responses::{ApiResponse, MachineLookup, SubmitReply},
};
use reqwest::StatusCode;
use reqwest::multipart::Form;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the machinery backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn multipart_post(&self, path: &str, form: Form) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        let response = self.empty_get("marcas").await?;
        ok_list(response).await
    }

    pub async fn list_machine_types(
        &self,
    ) -> Result<Vec<MachineType>, ClientError> {
        let response = self.empty_get("tipos-maquina").await?;
        ok_list(response).await
    }

    pub async fn list_machine_states(
        &self,
    ) -> Result<Vec<MachineState>, ClientError> {
        let response = self.empty_get("estados-maquina").await?;
        ok_list(response).await
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        let response = self.empty_get("empresas").await?;
        ok_list(response).await
    }

    /// Fetch a stored machine for editing.
    pub async fn get_machine(
        &self,
        machine_id: &MachineId,
    ) -> Result<MachineRecord, ClientError> {
        let response =
            self.empty_get(&format!("maquinaria/{machine_id}")).await?;
        match ok_body::<MachineLookup>(response).await? {
            MachineLookup::Bare(record) => Ok(record),
            MachineLookup::Envelope(envelope) => {
                envelope.into_data()?.ok_or_else(|| {
                    ClientError::Rejected(format!(
                        "La máquina {machine_id} no devolvió datos"
                    ))
                })
            }
        }
    }

    /// Register a new machine. A business failure is reported through the
    /// returned envelope, not as an error.
    pub async fn create_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError> {
        let response = self
            .multipart_post("maquinaria/registrar", submission.into_form()?)
            .await?;
        ok_body(response).await
    }

    /// Update an existing machine. A business failure is reported through the
    /// returned envelope, not as an error.
    pub async fn update_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError> {
        let response = self
            .multipart_post("maquinaria/actualizar", submission.into_form()?)
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Error de red. Revise su conexión.")]
    Network(#[from] reqwest::Error),
    /// The backend answered a read with `success=false`.
    #[error("{0}")]
    Rejected(String),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Deserialize an enveloped list. A successful envelope without data is an
/// empty list.
async fn ok_list<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Vec<T>, ClientError> {
    let envelope: ApiResponse<Vec<T>> = ok_body(response).await?;
    Ok(envelope.into_data()?.unwrap_or_default())
}
