//! The form driven through `APIClient` against the mock backend.

use machine_form::{
    Field, FormMode, LoadError, MachineForm, NextStep, Operation, ReadTicket,
    SubmissionOutcome,
};
use payloads::{MachineId, requests::fields};
use test_helpers::{
    ListFailure, SubmissionKind, mock, spawn_backend, unreachable_client,
};

#[tokio::test]
async fn create_round_trip() -> anyhow::Result<()> {
    let backend = spawn_backend().await;
    let mut form = MachineForm::load(&backend.client, None).await?;
    form.fields.set(Field::ChassisNumber, "VOL-EC220-0001");
    form.fields.set(Field::MachineType, "1");
    form.fields.set(Field::Model, "EC220E");
    form.fields.set(Field::State, "1");
    form.fields.set(Field::HourMeter, "12");
    form.fields.set(Field::Company, "1");
    form.fields.set(Field::Brand, "4");
    let ticket = ReadTicket::new();
    form.image.select(ticket, "ec220.jpg", "image/jpeg");
    form.image.complete(ticket, vec![0xff, 0xd8, 0xff]);

    let outcome = form.submit(&backend.client).await;

    assert_eq!(outcome, SubmissionOutcome::Saved(Operation::Create));
    let submissions = backend.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].kind, SubmissionKind::Create);
    assert_eq!(submissions[0].field(fields::ID), Some(""));
    assert_eq!(submissions[0].field(fields::MODEL), Some("EC220E"));
    assert_eq!(
        submissions[0].image.as_ref().map(|i| i.file_name.as_str()),
        Some("ec220.jpg")
    );

    let stored = backend.client.get_machine(&MachineId(2)).await?;
    assert_eq!(stored.chassis_number, "VOL-EC220-0001");

    Ok(())
}

#[tokio::test]
async fn edit_round_trip() -> anyhow::Result<()> {
    let backend = spawn_backend().await;
    backend.state().wrap_machine_lookups = true;
    let mut form =
        MachineForm::load(&backend.client, Some(mock::SAMPLE_MACHINE_ID))
            .await?;
    assert_eq!(form.mode, FormMode::Edit(mock::SAMPLE_MACHINE_ID));
    assert_eq!(backend.state().machine_lookups, vec![mock::SAMPLE_MACHINE_ID]);

    form.fields.set(Field::State, "1");
    let outcome = form.submit(&backend.client).await;

    assert_eq!(outcome, SubmissionOutcome::Saved(Operation::Update));
    let submissions = backend.submissions();
    assert_eq!(submissions[0].kind, SubmissionKind::Update);
    assert_eq!(submissions[0].field(fields::ID), Some("1"));
    assert_eq!(submissions[0].field(fields::STATE), Some("1"));
    assert_eq!(submissions[0].image, None);

    Ok(())
}

#[tokio::test]
async fn backend_rejection_reaches_the_dialog() -> anyhow::Result<()> {
    let backend = spawn_backend().await;
    backend.reject_submissions("El horómetro no puede disminuir");
    let mut form =
        MachineForm::load(&backend.client, Some(mock::SAMPLE_MACHINE_ID))
            .await?;

    let outcome = form.submit(&backend.client).await;

    assert_eq!(
        outcome.dialog().unwrap().text,
        "El horómetro no puede disminuir"
    );
    assert_eq!(outcome.next_step(&Default::default()), NextStep::Stay);

    Ok(())
}

#[tokio::test]
async fn failing_list_endpoint_fails_the_load() {
    let backend = spawn_backend().await;
    backend.fail_list("estados-maquina", ListFailure::ServerError);

    let result = MachineForm::load(&backend.client, None).await;

    assert!(matches!(result, Err(LoadError::ReferenceData(_))));
}

#[tokio::test]
async fn unreachable_backend_fails_the_load() {
    let client = unreachable_client();

    let result = MachineForm::load(&client, None).await;

    assert!(matches!(result, Err(LoadError::ReferenceData(_))));
}

#[tokio::test]
async fn backend_going_away_is_a_transport_failure() -> anyhow::Result<()> {
    let backend = spawn_backend().await;
    let mut form =
        MachineForm::load(&backend.client, Some(mock::SAMPLE_MACHINE_ID))
            .await?;

    let outcome = form.submit(&unreachable_client()).await;

    assert!(matches!(
        outcome,
        SubmissionOutcome::TransportFailed {
            operation: Operation::Update,
            ..
        }
    ));
    assert_eq!(
        outcome.next_step(&Default::default()),
        NextStep::NavigateToListing
    );

    Ok(())
}
