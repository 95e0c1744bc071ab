pub mod mock;
mod routes;
pub mod telemetry;

use std::collections::{BTreeMap, HashMap};
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};

use actix_cors::Cors;
use actix_web::{App, HttpServer, dev::Server, web};
use payloads::{
    Brand, Company, MachineId, MachineRecord, MachineState, MachineType,
    requests::ImageUpload,
};
use reqwest::StatusCode;

/// In-memory data served by the mock backend, plus switches that make it
/// misbehave and a log of what it received.
#[derive(Debug, Default)]
pub struct BackendState {
    pub brands: Vec<Brand>,
    pub machine_types: Vec<MachineType>,
    pub machine_states: Vec<MachineState>,
    pub companies: Vec<Company>,
    pub machines: BTreeMap<MachineId, MachineRecord>,
    /// Every create/update request received, in arrival order.
    pub submissions: Vec<RecordedSubmission>,
    /// Ids requested through the machine lookup endpoint.
    pub machine_lookups: Vec<MachineId>,
    /// Lists (by endpoint name, e.g. "empresas") that fail when requested.
    pub list_failures: HashMap<String, ListFailure>,
    /// When set, every submission is answered `success=false` with this
    /// message.
    pub rejection_message: Option<String>,
    /// Answer machine lookups with an envelope instead of a bare record.
    pub wrap_machine_lookups: bool,
}

impl BackendState {
    pub fn insert_machine(&mut self, record: MachineRecord) {
        self.machines.insert(record.id, record);
    }

    fn next_machine_id(&self) -> MachineId {
        let last = self.machines.keys().next_back().map_or(0, |id| id.0);
        MachineId(last + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFailure {
    /// Respond 500 with a plain text body.
    ServerError,
    /// Respond 200 with `success=false` and this message.
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Create,
    Update,
}

/// A multipart submission as the backend received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSubmission {
    pub kind: SubmissionKind,
    pub fields: BTreeMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl RecordedSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

pub struct TestBackend {
    pub port: u16,
    pub client: payloads::APIClient,
    pub state: Arc<Mutex<BackendState>>,
}

impl TestBackend {
    pub fn state(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap()
    }

    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.state().submissions.clone()
    }

    pub fn fail_list(&self, endpoint: &str, failure: ListFailure) {
        self.state().list_failures.insert(endpoint.to_string(), failure);
    }

    pub fn reject_submissions(&self, message: &str) {
        self.state().rejection_message = Some(message.to_string());
    }

    /// A client pointed at this backend, e.g. to drive it from a second
    /// session.
    pub fn new_client(&self) -> payloads::APIClient {
        client_for_port(self.port)
    }
}

/// Build the mock backend server. The OS assigns the port when `port` is 0;
/// the bound port is returned alongside the server.
pub fn build(
    state: Arc<Mutex<BackendState>>,
    ip: &str,
    port: u16,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let state = web::Data::from(state);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(web::scope("/api").configure(routes::configure))
    })
    .workers(1)
    .listen(listener)?
    .run();

    Ok((server, port))
}

pub async fn spawn_backend_on_port(
    port: u16,
    state: BackendState,
) -> TestBackend {
    let subscriber = telemetry::get_subscriber("error".into());
    telemetry::try_init_subscriber(subscriber);

    let state = Arc::new(Mutex::new(state));
    let (server, port) = build(state.clone(), "127.0.0.1", port).unwrap();
    tokio::spawn(server);

    TestBackend {
        port,
        client: client_for_port(port),
        state,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_backend() -> TestBackend {
    spawn_backend_on_port(0, mock::seeded_state()).await
}

/// A client for a port nothing listens on, to provoke transport failures.
pub fn unreachable_client() -> payloads::APIClient {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    client_for_port(port)
}

fn client_for_port(port: u16) -> payloads::APIClient {
    payloads::APIClient {
        address: format!("http://127.0.0.1:{port}"),
        inner_client: reqwest::Client::new(),
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
