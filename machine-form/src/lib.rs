//! Rendering-free lifecycle of the machine registration form.
//!
//! A page activation goes through [`MachineForm::load`], which fetches the
//! four reference lists concurrently and resolves whether a machine is being
//! created or edited. User input flows into [`MachineFields`] and
//! [`ImagePicker`], and [`MachineForm::submit`] validates, dispatches to the
//! create or update endpoint, and returns a [`SubmissionOutcome`] from which
//! the caller derives the dialog to show and where to navigate afterwards.
//!
//! All backend access goes through [`MachineryService`], implemented by
//! [`payloads::APIClient`].

pub mod error;
pub mod fields;
pub mod form;
pub mod image;
pub mod mode;
pub mod reference;
pub mod submission;

pub use error::LoadError;
pub use fields::{Field, FieldError, FieldErrors, MachineFields};
pub use form::MachineForm;
pub use image::{ImagePicker, ReadTicket, data_url};
pub use mode::{FormMode, Resolution, resolve_mode};
pub use reference::{ReferenceData, load_reference_data};
pub use submission::{
    AbortReason, Dialog, DialogKind, FormSettings, NextStep, Operation,
    SubmissionOutcome, TransportErrorPolicy, dispatch,
};

use payloads::{
    APIClient, Brand, ClientError, Company, MachineId, MachineRecord,
    MachineState, MachineType, requests::MachineSubmission,
    responses::SubmitReply,
};

/// Backend operations the form depends on.
///
/// The futures are not required to be `Send`; in the browser everything runs
/// on the single UI thread.
#[allow(async_fn_in_trait)]
pub trait MachineryService {
    async fn list_brands(&self) -> Result<Vec<Brand>, ClientError>;

    async fn list_machine_types(
        &self,
    ) -> Result<Vec<MachineType>, ClientError>;

    async fn list_machine_states(
        &self,
    ) -> Result<Vec<MachineState>, ClientError>;

    async fn list_companies(&self) -> Result<Vec<Company>, ClientError>;

    async fn get_machine(
        &self,
        machine_id: MachineId,
    ) -> Result<MachineRecord, ClientError>;

    async fn create_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError>;

    async fn update_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError>;
}

impl MachineryService for APIClient {
    async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        APIClient::list_brands(self).await
    }

    async fn list_machine_types(
        &self,
    ) -> Result<Vec<MachineType>, ClientError> {
        APIClient::list_machine_types(self).await
    }

    async fn list_machine_states(
        &self,
    ) -> Result<Vec<MachineState>, ClientError> {
        APIClient::list_machine_states(self).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        APIClient::list_companies(self).await
    }

    async fn get_machine(
        &self,
        machine_id: MachineId,
    ) -> Result<MachineRecord, ClientError> {
        APIClient::get_machine(self, &machine_id).await
    }

    async fn create_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError> {
        APIClient::create_machine(self, submission).await
    }

    async fn update_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError> {
        APIClient::update_machine(self, submission).await
    }
}
