use std::rc::Rc;

use machine_form::{
    Field, MachineForm, NextStep, Operation, ReadTicket, SubmissionOutcome,
    dispatch,
};
use payloads::{MachineId, requests::MachineSubmission};
use uuid::Uuid;
use yew::prelude::*;

use crate::{
    Route, components::ImageSelection, contexts::toast::use_toast,
    form_settings, get_api_client, hooks::use_push_route,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// A validated submission waiting for its request to complete.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    attempt: Uuid,
    operation: Operation,
    submission: MachineSubmission,
}

/// Everything the registration page renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    /// Route id the current load was started for.
    route_id: Option<MachineId>,
    pub form: MachineForm,
    pub load: LoadStatus,
    pending: Option<PendingSubmission>,
    /// Result of the last submission, until its dialog is acknowledged.
    pub outcome: Option<SubmissionOutcome>,
}

impl PageState {
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Inputs are locked until the form is loaded and while a request is
    /// in flight.
    pub fn is_locked(&self) -> bool {
        self.load != LoadStatus::Ready || self.is_submitting()
    }

    /// The submit button also waits for a picked image to be read.
    pub fn can_submit(&self) -> bool {
        !self.is_locked() && !self.form.image.is_reading()
    }
}

pub enum PageAction {
    StartLoad(Option<MachineId>),
    Loaded {
        route_id: Option<MachineId>,
        form: MachineForm,
    },
    LoadFailed {
        route_id: Option<MachineId>,
        message: String,
    },
    Input(Field, String),
    ImageSelected(ImageSelection),
    ImageRead(ReadTicket, Vec<u8>),
    ImageReadFailed(ReadTicket),
    Submit,
    Finished {
        attempt: Uuid,
        outcome: SubmissionOutcome,
    },
    Acknowledge,
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();

        match action {
            PageAction::StartLoad(route_id) => {
                state = PageState {
                    route_id,
                    ..PageState::default()
                };
            }
            // Loads started for a previous route are dropped.
            PageAction::Loaded { route_id, form } => {
                if route_id != state.route_id {
                    return self;
                }
                state.form = form;
                state.load = LoadStatus::Ready;
            }
            PageAction::LoadFailed { route_id, message } => {
                if route_id != state.route_id {
                    return self;
                }
                state.load = LoadStatus::Failed(message);
            }
            PageAction::Input(field, raw) => state.form.fields.set(field, &raw),
            PageAction::ImageSelected(selection) => state.form.image.select(
                selection.ticket,
                selection.file_name,
                selection.mime_type,
            ),
            PageAction::ImageRead(ticket, bytes) => {
                state.form.image.complete(ticket, bytes);
            }
            PageAction::ImageReadFailed(ticket) => {
                state.form.image.fail(ticket)
            }
            PageAction::Submit => {
                if state.is_submitting() {
                    return self;
                }
                match state.form.prepare_submission() {
                    Ok((operation, submission)) => {
                        state.pending = Some(PendingSubmission {
                            attempt: Uuid::new_v4(),
                            operation,
                            submission,
                        });
                    }
                    Err(reason) => {
                        tracing::debug!(?reason, "Submission aborted");
                    }
                }
            }
            PageAction::Finished { attempt, outcome } => {
                if state.pending.as_ref().map(|p| p.attempt) != Some(attempt)
                {
                    return self;
                }
                state.pending = None;
                state.outcome = Some(outcome);
            }
            PageAction::Acknowledge => state.outcome = None,
        }

        Rc::new(state)
    }
}

pub struct MachineFormHandle {
    pub state: UseReducerHandle<PageState>,
    pub on_input: Callback<(Field, String)>,
    pub on_image_select: Callback<ImageSelection>,
    pub on_image_read: Callback<(ReadTicket, Vec<u8>)>,
    pub on_image_read_failed: Callback<ReadTicket>,
    pub on_submit: Callback<()>,
    /// Close the outcome dialog and take the step that follows it.
    pub on_acknowledge: Callback<()>,
}

/// Drives one activation of the registration page: loads the form for the
/// route, feeds it user input and runs submissions against the backend.
#[hook]
pub fn use_machine_form(machine_id: Option<MachineId>) -> MachineFormHandle {
    let state = use_reducer(PageState::default);
    let toast = use_toast();
    let push_route = use_push_route();

    {
        let state = state.clone();
        let toast = toast.clone();
        use_effect_with(machine_id, move |route_id| {
            let route_id = *route_id;
            state.dispatch(PageAction::StartLoad(route_id));

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match MachineForm::load(&api_client, route_id).await {
                    Ok(form) => {
                        state.dispatch(PageAction::Loaded { route_id, form })
                    }
                    Err(e) => {
                        let message = e.to_string();
                        toast.error(message.clone());
                        state.dispatch(PageAction::LoadFailed {
                            route_id,
                            message,
                        });
                    }
                }
            });
        });
    }

    {
        let state = state.clone();
        let attempt = state.pending.as_ref().map(|p| p.attempt);
        use_effect_with(attempt, move |_| {
            if let Some(pending) = state.pending.clone() {
                yew::platform::spawn_local(async move {
                    let outcome = dispatch(
                        &get_api_client(),
                        pending.operation,
                        pending.submission,
                    )
                    .await;
                    state.dispatch(PageAction::Finished {
                        attempt: pending.attempt,
                        outcome,
                    });
                });
            }
        });
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |(field, raw): (Field, String)| {
            state.dispatch(PageAction::Input(field, raw))
        })
    };

    let on_image_select = {
        let state = state.clone();
        Callback::from(move |selection: ImageSelection| {
            state.dispatch(PageAction::ImageSelected(selection))
        })
    };

    let on_image_read = {
        let state = state.clone();
        Callback::from(move |(ticket, bytes): (ReadTicket, Vec<u8>)| {
            state.dispatch(PageAction::ImageRead(ticket, bytes))
        })
    };

    let on_image_read_failed = {
        let state = state.clone();
        Callback::from(move |ticket: ReadTicket| {
            toast.warning("No se pudo leer la imagen seleccionada");
            state.dispatch(PageAction::ImageReadFailed(ticket))
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Submit))
    };

    let on_acknowledge = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let Some(outcome) = state.outcome.clone() else {
                return;
            };
            state.dispatch(PageAction::Acknowledge);
            if outcome.next_step(&form_settings())
                == NextStep::NavigateToListing
            {
                push_route.emit(Route::Information);
            }
        })
    };

    MachineFormHandle {
        state,
        on_input,
        on_image_select,
        on_image_read,
        on_image_read_failed,
        on_submit,
        on_acknowledge,
    }
}
