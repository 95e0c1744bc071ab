use payloads::{ClientError, requests::MachineSubmission};

use crate::{FieldErrors, MachineryService};

/// Which backend call a submission goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

impl Operation {
    fn success_text(&self) -> &'static str {
        match self {
            Self::Create => "Registro guardado con éxito",
            Self::Update => "Maquina actualizada correctamente",
        }
    }

    fn transport_error_text(&self) -> &'static str {
        match self {
            Self::Create => "Hubo un error al guardar la máquina",
            Self::Update => "Hubo un error al actualizar la máquina",
        }
    }
}

/// Where to go after a transport failure once the user dismissed the error
/// dialog. Business failures always keep the user on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportErrorPolicy {
    /// Leave the form for the listing view, even though the machine may or
    /// may not have been saved.
    #[default]
    NavigateToListing,
    StayOnForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormSettings {
    pub transport_error_policy: TransportErrorPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The form has not finished loading.
    NotReady,
    /// A picked image is still being read.
    ImageReading,
    Invalid(FieldErrors),
}

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Nothing was sent.
    Aborted(AbortReason),
    Saved(Operation),
    /// The backend answered `success=false`.
    Rejected { operation: Operation, message: String },
    /// The request failed or the reply could not be understood.
    TransportFailed { operation: Operation, error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Success,
    Error,
}

/// A modal message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub text: String,
}

impl Dialog {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Success,
            title: "Éxito".to_string(),
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    NavigateToListing,
    Stay,
}

impl SubmissionOutcome {
    /// The dialog to show, if any. Aborted submissions are silent; the form
    /// shows its inline errors instead.
    pub fn dialog(&self) -> Option<Dialog> {
        match self {
            Self::Aborted(_) => None,
            Self::Saved(operation) => {
                Some(Dialog::success(operation.success_text()))
            }
            Self::Rejected { operation, message } => {
                Some(Dialog::error(if message.trim().is_empty() {
                    operation.transport_error_text()
                } else {
                    message.as_str()
                }))
            }
            Self::TransportFailed { operation, .. } => {
                Some(Dialog::error(operation.transport_error_text()))
            }
        }
    }

    /// Where to go once the dialog has been acknowledged.
    pub fn next_step(&self, settings: &FormSettings) -> NextStep {
        match self {
            Self::Saved(_) => NextStep::NavigateToListing,
            Self::TransportFailed { .. } => {
                match settings.transport_error_policy {
                    TransportErrorPolicy::NavigateToListing => {
                        NextStep::NavigateToListing
                    }
                    TransportErrorPolicy::StayOnForm => NextStep::Stay,
                }
            }
            Self::Aborted(_) | Self::Rejected { .. } => NextStep::Stay,
        }
    }
}

/// Send a validated submission to the create or update endpoint and classify
/// the reply.
pub async fn dispatch<S: MachineryService>(
    service: &S,
    operation: Operation,
    submission: MachineSubmission,
) -> SubmissionOutcome {
    let reply = match operation {
        Operation::Create => service.create_machine(submission).await,
        Operation::Update => service.update_machine(submission).await,
    };

    match reply {
        Ok(reply) if reply.success => {
            tracing::debug!(?operation, "Machine saved");
            SubmissionOutcome::Saved(operation)
        }
        Ok(reply) => {
            let message = reply.message.unwrap_or_default();
            tracing::warn!(?operation, "Backend rejected machine: {message}");
            SubmissionOutcome::Rejected { operation, message }
        }
        Err(e) => {
            tracing::warn!(?operation, "Failed to submit machine: {e}");
            SubmissionOutcome::TransportFailed {
                operation,
                error: describe(&e),
            }
        }
    }
}

fn describe(error: &ClientError) -> String {
    match error {
        ClientError::APIError(status, text) => format!("{status}: {text}"),
        other => other.to_string(),
    }
}
