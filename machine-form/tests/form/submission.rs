use machine_form::{
    AbortReason, DialogKind, Field, FieldError, FormSettings, MachineForm,
    NextStep, Operation, ReadTicket, SubmissionOutcome, TransportErrorPolicy,
    data_url,
};
use payloads::MachineId;
use rust_decimal::dec;
use test_helpers::mock;

use crate::fake::{FakeService, Reply};

async fn filled_create_form(service: &FakeService) -> MachineForm {
    let mut form = MachineForm::load(service, None).await.unwrap();
    for (field, raw) in [
        (Field::ChassisNumber, "KMT-PC210-7788"),
        (Field::MachineType, "2"),
        (Field::Model, "PC210"),
        (Field::State, "1"),
        (Field::HourMeter, "87.25"),
        (Field::Company, "2"),
        (Field::Brand, "2"),
    ] {
        form.fields.set(field, raw);
    }
    form
}

#[tokio::test]
async fn any_missing_field_blocks_the_submission() {
    for missing in Field::ALL {
        let service = FakeService::default();
        let mut form = filled_create_form(&service).await;
        form.fields.set(missing, "");

        let outcome = form.submit(&service).await;

        let SubmissionOutcome::Aborted(AbortReason::Invalid(errors)) = &outcome
        else {
            panic!("{missing:?} unset should abort, got {outcome:?}");
        };
        assert_eq!(errors.get(missing), Some(FieldError::Required));
        assert_eq!(outcome.dialog(), None);
        assert_eq!(service.calls.borrow().submissions(), 0);
        assert_eq!(form.visible_error(missing), Some(FieldError::Required));
    }
}

#[tokio::test]
async fn errors_stay_hidden_until_first_submit() {
    let service = FakeService::default();
    let mut form = MachineForm::load(&service, None).await.unwrap();

    assert_eq!(form.visible_error(Field::Model), None);

    form.submit(&service).await;

    assert!(form.submitted());
    assert_eq!(form.visible_error(Field::Model), Some(FieldError::Required));
}

#[tokio::test]
async fn uninitialized_form_cannot_submit() {
    let service = FakeService::default();
    let mut form = MachineForm::default();
    form.fields = filled_create_form(&service).await.fields;

    let outcome = form.submit(&service).await;

    assert_eq!(outcome, SubmissionOutcome::Aborted(AbortReason::NotReady));
    assert_eq!(service.calls.borrow().submissions(), 0);
}

#[tokio::test]
async fn successful_create_navigates_after_the_dialog() {
    let service = FakeService::default();
    let mut form = filled_create_form(&service).await;

    let outcome = form.submit(&service).await;

    assert_eq!(outcome, SubmissionOutcome::Saved(Operation::Create));
    let dialog = outcome.dialog().unwrap();
    assert_eq!(dialog.kind, DialogKind::Success);
    assert_eq!(dialog.title, "Éxito");
    assert_eq!(dialog.text, "Registro guardado con éxito");
    assert_eq!(
        outcome.next_step(&FormSettings::default()),
        NextStep::NavigateToListing
    );

    let calls = service.calls.borrow();
    assert_eq!(calls.creates.len(), 1);
    assert!(calls.updates.is_empty());
    let sent = &calls.creates[0];
    assert_eq!(sent.id, None);
    assert_eq!(sent.hour_meter, dec!(87.25));
    assert_eq!(sent.image, None);
}

#[tokio::test]
async fn successful_update_sends_the_record_id() {
    let service = FakeService::default();
    let mut form =
        MachineForm::load(&service, Some(mock::SAMPLE_MACHINE_ID))
            .await
            .unwrap();
    form.fields.set(Field::HourMeter, "1300");

    let outcome = form.submit(&service).await;

    assert_eq!(outcome, SubmissionOutcome::Saved(Operation::Update));
    assert_eq!(
        outcome.dialog().unwrap().text,
        "Maquina actualizada correctamente"
    );
    let calls = service.calls.borrow();
    assert!(calls.creates.is_empty());
    assert_eq!(calls.updates[0].id, Some(mock::SAMPLE_MACHINE_ID));
    assert_eq!(calls.updates[0].hour_meter, dec!(1300));
}

#[tokio::test]
async fn rejection_shows_the_server_message_and_stays() {
    let message = "Ya existe una máquina con ese número de chasis";
    let service =
        FakeService::replying(Reply::Rejected(Some(message.to_string())));
    let mut form = filled_create_form(&service).await;

    let outcome = form.submit(&service).await;

    let dialog = outcome.dialog().unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Error");
    assert_eq!(dialog.text, message);
    for policy in [
        TransportErrorPolicy::NavigateToListing,
        TransportErrorPolicy::StayOnForm,
    ] {
        let settings = FormSettings {
            transport_error_policy: policy,
        };
        assert_eq!(outcome.next_step(&settings), NextStep::Stay);
    }
}

#[tokio::test]
async fn rejection_without_message_uses_the_generic_text() {
    let service = FakeService::replying(Reply::Rejected(None));
    let mut form =
        MachineForm::load(&service, Some(mock::SAMPLE_MACHINE_ID))
            .await
            .unwrap();

    let outcome = form.submit(&service).await;

    assert_eq!(
        outcome.dialog().unwrap().text,
        "Hubo un error al actualizar la máquina"
    );
}

#[tokio::test]
async fn transport_failure_follows_the_policy() {
    let service = FakeService::replying(Reply::TransportFailure);
    let mut form = filled_create_form(&service).await;

    let outcome = form.submit(&service).await;

    assert!(matches!(
        outcome,
        SubmissionOutcome::TransportFailed {
            operation: Operation::Create,
            ..
        }
    ));
    assert_eq!(
        outcome.dialog().unwrap().text,
        "Hubo un error al guardar la máquina"
    );
    assert_eq!(
        outcome.next_step(&FormSettings::default()),
        NextStep::NavigateToListing
    );
    let stay = FormSettings {
        transport_error_policy: TransportErrorPolicy::StayOnForm,
    };
    assert_eq!(outcome.next_step(&stay), NextStep::Stay);
}

#[tokio::test]
async fn selected_image_is_submitted_and_last_selection_wins() {
    let service = FakeService::default();
    let mut form = filled_create_form(&service).await;

    let first = ReadTicket::new();
    form.image.select(first, "lateral.jpg", "image/jpeg");
    assert!(form.image.complete(first, b"first".to_vec()));

    let second = ReadTicket::new();
    form.image.select(second, "frente.png", "image/png");
    assert!(form.image.complete(second, b"second".to_vec()));

    assert_eq!(
        form.image.preview_url(),
        Some(data_url("image/png", b"second").as_str())
    );

    form.submit(&service).await;

    let calls = service.calls.borrow();
    let image = calls.creates[0].image.as_ref().unwrap();
    assert_eq!(image.file_name, "frente.png");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.bytes, b"second");
}

#[tokio::test]
async fn superseded_read_does_not_change_the_preview() {
    let service = FakeService::default();
    let mut form = MachineForm::load(&service, Some(MachineId(1)))
        .await
        .unwrap();
    let stored = form.image.preview_url().map(str::to_string);

    let first = ReadTicket::new();
    let second = ReadTicket::new();
    form.image.select(first, "a.jpg", "image/jpeg");
    form.image.select(second, "b.jpg", "image/jpeg");

    assert!(!form.image.complete(first, b"a".to_vec()));
    assert_eq!(form.image.preview_url(), stored.as_deref());
    assert!(form.image.is_reading());
}

#[tokio::test]
async fn submit_waits_for_a_pending_image_read() {
    let service = FakeService::default();
    let mut form = filled_create_form(&service).await;
    let ticket = ReadTicket::new();
    form.image.select(ticket, "frente.png", "image/png");

    let outcome = form.submit(&service).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Aborted(AbortReason::ImageReading)
    );
    assert_eq!(outcome.dialog(), None);
    assert_eq!(service.calls.borrow().submissions(), 0);

    assert!(form.image.complete(ticket, b"png".to_vec()));
    form.submit(&service).await;

    let calls = service.calls.borrow();
    let image = calls.creates[0].image.as_ref().unwrap();
    assert_eq!(image.file_name, "frente.png");
    assert_eq!(image.bytes, b"png");
}

#[tokio::test]
async fn failed_second_read_submits_the_first_image() {
    let service = FakeService::default();
    let mut form = filled_create_form(&service).await;

    let first = ReadTicket::new();
    form.image.select(first, "a.png", "image/png");
    assert!(form.image.complete(first, b"A".to_vec()));
    let second = ReadTicket::new();
    form.image.select(second, "b.png", "image/png");
    form.image.fail(second);

    assert_eq!(form.image.file_name(), Some("a.png"));
    form.submit(&service).await;

    let calls = service.calls.borrow();
    let image = calls.creates[0].image.as_ref().unwrap();
    assert_eq!(image.file_name, "a.png");
    assert_eq!(image.bytes, b"A");
}
