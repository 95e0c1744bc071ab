use std::collections::BTreeMap;
use std::sync::Mutex;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use base64::{Engine as _, engine::general_purpose};
use futures_util::StreamExt;
use payloads::{
    ApiResponse, BrandId, CompanyId, MachineId, MachineRecord, MachineStateId,
    MachineTypeId,
    requests::{DEFAULT_IMAGE_MIME, ImageUpload, fields},
};
use serde::Serialize;

use crate::{BackendState, ListFailure, RecordedSubmission, SubmissionKind};

type State = web::Data<Mutex<BackendState>>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/marcas", web::get().to(list_brands))
        .route("/tipos-maquina", web::get().to(list_machine_types))
        .route("/estados-maquina", web::get().to(list_machine_states))
        .route("/empresas", web::get().to(list_companies))
        .route("/maquinaria/registrar", web::post().to(create_machine))
        .route("/maquinaria/actualizar", web::post().to(update_machine))
        .route("/maquinaria/{id}", web::get().to(get_machine));
}

async fn list_brands(state: State) -> HttpResponse {
    list_response(&state, "marcas", |s| &s.brands)
}

async fn list_machine_types(state: State) -> HttpResponse {
    list_response(&state, "tipos-maquina", |s| &s.machine_types)
}

async fn list_machine_states(state: State) -> HttpResponse {
    list_response(&state, "estados-maquina", |s| &s.machine_states)
}

async fn list_companies(state: State) -> HttpResponse {
    list_response(&state, "empresas", |s| &s.companies)
}

fn list_response<T: Serialize>(
    state: &State,
    endpoint: &str,
    items: impl Fn(&BackendState) -> &Vec<T>,
) -> HttpResponse {
    let state = state.lock().unwrap();
    match state.list_failures.get(endpoint) {
        Some(ListFailure::ServerError) => HttpResponse::InternalServerError()
            .body(format!("Error interno al consultar {endpoint}")),
        Some(ListFailure::Rejected(message)) => {
            HttpResponse::Ok().json(ApiResponse::<()>::failure(message))
        }
        None => HttpResponse::Ok().json(ApiResponse::ok(items(&*state))),
    }
}

async fn get_machine(state: State, path: web::Path<i64>) -> HttpResponse {
    let machine_id = MachineId(path.into_inner());
    let mut state = state.lock().unwrap();
    state.machine_lookups.push(machine_id);

    match state.machines.get(&machine_id) {
        Some(record) if state.wrap_machine_lookups => {
            HttpResponse::Ok().json(ApiResponse::ok(record))
        }
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().body("Máquina no encontrada"),
    }
}

async fn create_machine(
    state: State,
    payload: Multipart,
) -> actix_web::Result<HttpResponse> {
    let submission = read_submission(SubmissionKind::Create, payload).await?;
    let mut state = state.lock().unwrap();
    state.submissions.push(submission.clone());

    if let Some(message) = state.rejection_message.clone() {
        return Ok(rejected(message));
    }

    let machine_id = state.next_machine_id();
    let record = match parse_record(machine_id, &submission, None) {
        Ok(record) => record,
        Err(message) => return Ok(rejected(message)),
    };
    if state
        .machines
        .values()
        .any(|m| m.chassis_number == record.chassis_number)
    {
        return Ok(rejected("Ya existe una máquina con ese número de chasis"));
    }

    tracing::info!(%machine_id, "Registered machine");
    state.insert_machine(record);
    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(serde_json::json!({ "id": machine_id }))))
}

async fn update_machine(
    state: State,
    payload: Multipart,
) -> actix_web::Result<HttpResponse> {
    let submission = read_submission(SubmissionKind::Update, payload).await?;
    let mut state = state.lock().unwrap();
    state.submissions.push(submission.clone());

    if let Some(message) = state.rejection_message.clone() {
        return Ok(rejected(message));
    }

    let Some(machine_id) = submission
        .field(fields::ID)
        .and_then(|id| id.parse().ok())
        .map(MachineId)
    else {
        return Ok(rejected("Identificador de máquina inválido"));
    };
    let Some(existing) = state.machines.get(&machine_id) else {
        return Ok(rejected("La máquina no existe"));
    };

    let record = match parse_record(machine_id, &submission, Some(existing)) {
        Ok(record) => record,
        Err(message) => return Ok(rejected(message)),
    };
    if state.machines.values().any(|m| {
        m.id != machine_id && m.chassis_number == record.chassis_number
    }) {
        return Ok(rejected("Ya existe una máquina con ese número de chasis"));
    }

    tracing::info!(%machine_id, "Updated machine");
    state.insert_machine(record);
    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(serde_json::json!({ "id": machine_id }))))
}

fn rejected(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::failure(message))
}

/// Collect the text fields and the optional image of a multipart body.
async fn read_submission(
    kind: SubmissionKind,
    mut payload: Multipart,
) -> actix_web::Result<RecordedSubmission> {
    let mut text_fields = BTreeMap::new();
    let mut image = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()))
            .unwrap_or_default();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));
        let mime_type = field.content_type().map(|m| m.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        match file_name {
            Some(file_name) if name == fields::IMAGE => {
                image = Some(ImageUpload {
                    file_name,
                    mime_type: mime_type
                        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
                    bytes,
                });
            }
            _ => {
                text_fields
                    .insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    Ok(RecordedSubmission {
        kind,
        fields: text_fields,
        image,
    })
}

/// Turn a submission into a stored record. The stored image is kept when an
/// update carries no new file.
fn parse_record(
    machine_id: MachineId,
    submission: &RecordedSubmission,
    existing: Option<&MachineRecord>,
) -> Result<MachineRecord, String> {
    let text = |name: &str| {
        submission
            .field(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| format!("El campo {name} es obligatorio"))
    };
    let number = |name: &str| -> Result<i64, String> {
        text(name)?
            .parse::<i64>()
            .map_err(|_| format!("El campo {name} debe ser numérico"))
    };

    let (image_url, image_name) = match &submission.image {
        Some(image) => (
            Some(format!(
                "data:{};base64,{}",
                image.mime_type,
                general_purpose::STANDARD.encode(&image.bytes)
            )),
            Some(image.file_name.clone()),
        ),
        None => existing
            .map(|m| (m.image_url.clone(), m.image_name.clone()))
            .unwrap_or_default(),
    };

    Ok(MachineRecord {
        id: machine_id,
        chassis_number: text(fields::CHASSIS_NUMBER)?,
        machine_type_id: MachineTypeId(number(fields::MACHINE_TYPE)?),
        model: text(fields::MODEL)?,
        state_id: MachineStateId(number(fields::STATE)?),
        hour_meter: text(fields::HOUR_METER)?
            .parse()
            .map_err(|_| "El horómetro debe ser numérico".to_string())?,
        company_id: CompanyId(number(fields::COMPANY)?),
        brand_id: BrandId(number(fields::BRAND)?),
        image_url,
        image_name,
    })
}
