//! In-memory `MachineryService` that records every call.

use std::cell::RefCell;

use machine_form::MachineryService;
use payloads::{
    ApiResponse, Brand, ClientError, Company, MachineId, MachineRecord,
    MachineState, MachineType, requests::MachineSubmission,
    responses::SubmitReply,
};
use reqwest::StatusCode;
use test_helpers::mock;

/// How the fake answers create and update calls.
#[derive(Debug, Clone)]
pub enum Reply {
    Success,
    Rejected(Option<String>),
    TransportFailure,
}

#[derive(Debug, Default)]
pub struct Calls {
    pub list_fetches: usize,
    pub machine_fetches: Vec<MachineId>,
    pub creates: Vec<MachineSubmission>,
    pub updates: Vec<MachineSubmission>,
}

impl Calls {
    pub fn submissions(&self) -> usize {
        self.creates.len() + self.updates.len()
    }
}

pub struct FakeService {
    pub brands: Vec<Brand>,
    pub machine_types: Vec<MachineType>,
    pub machine_states: Vec<MachineState>,
    pub companies: Vec<Company>,
    pub machines: Vec<MachineRecord>,
    /// Name of the list that fails, e.g. "companies".
    pub failing_list: Option<&'static str>,
    pub reply: Reply,
    pub calls: RefCell<Calls>,
}

impl Default for FakeService {
    fn default() -> Self {
        Self {
            brands: mock::brands(),
            machine_types: mock::machine_types(),
            machine_states: mock::machine_states(),
            companies: mock::companies(),
            machines: vec![mock::sample_machine()],
            failing_list: None,
            reply: Reply::Success,
            calls: RefCell::default(),
        }
    }
}

impl FakeService {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            ..Self::default()
        }
    }

    pub fn failing_list(list: &'static str) -> Self {
        Self {
            failing_list: Some(list),
            ..Self::default()
        }
    }

    fn list<T: Clone>(
        &self,
        name: &str,
        items: &[T],
    ) -> Result<Vec<T>, ClientError> {
        self.calls.borrow_mut().list_fetches += 1;
        if self.failing_list == Some(name) {
            return Err(ClientError::APIError(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{name} unavailable"),
            ));
        }
        Ok(items.to_vec())
    }

    fn reply(&self) -> Result<SubmitReply, ClientError> {
        match &self.reply {
            Reply::Success => {
                Ok(ApiResponse::ok(serde_json::json!({ "id": 2 })))
            }
            Reply::Rejected(message) => Ok(ApiResponse {
                success: false,
                message: message.clone(),
                data: None,
            }),
            Reply::TransportFailure => Err(ClientError::APIError(
                StatusCode::BAD_GATEWAY,
                "upstream unavailable".into(),
            )),
        }
    }
}

impl MachineryService for FakeService {
    async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        self.list("brands", &self.brands)
    }

    async fn list_machine_types(
        &self,
    ) -> Result<Vec<MachineType>, ClientError> {
        self.list("machine_types", &self.machine_types)
    }

    async fn list_machine_states(
        &self,
    ) -> Result<Vec<MachineState>, ClientError> {
        self.list("machine_states", &self.machine_states)
    }

    async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        self.list("companies", &self.companies)
    }

    async fn get_machine(
        &self,
        machine_id: MachineId,
    ) -> Result<MachineRecord, ClientError> {
        self.calls.borrow_mut().machine_fetches.push(machine_id);
        self.machines
            .iter()
            .find(|m| m.id == machine_id)
            .cloned()
            .ok_or_else(|| {
                ClientError::APIError(StatusCode::NOT_FOUND, "not found".into())
            })
    }

    async fn create_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError> {
        self.calls.borrow_mut().creates.push(submission);
        self.reply()
    }

    async fn update_machine(
        &self,
        submission: MachineSubmission,
    ) -> Result<SubmitReply, ClientError> {
        self.calls.borrow_mut().updates.push(submission);
        self.reply()
    }
}
