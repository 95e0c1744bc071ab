use machine_form::{
    Field, FormMode, LoadError, MachineForm, load_reference_data,
};
use payloads::MachineId;
use test_helpers::mock;

use crate::fake::FakeService;

#[tokio::test]
async fn reference_lists_are_kept_verbatim() -> anyhow::Result<()> {
    let mut service = FakeService::default();
    service.companies.reverse();

    let reference = load_reference_data(&service).await?;

    assert_eq!(reference.brands, service.brands);
    assert_eq!(reference.machine_types, service.machine_types);
    assert_eq!(reference.machine_states, service.machine_states);
    assert_eq!(reference.companies, service.companies);
    assert_eq!(service.calls.borrow().list_fetches, 4);

    Ok(())
}

#[tokio::test]
async fn create_mode_fetches_no_record() -> anyhow::Result<()> {
    let service = FakeService::default();

    let form = MachineForm::load(&service, None).await?;

    assert_eq!(form.mode, FormMode::Create);
    assert!(service.calls.borrow().machine_fetches.is_empty());
    for field in Field::ALL {
        assert_eq!(form.fields.value(field), "", "{field:?} should be unset");
    }
    assert_eq!(form.image.preview_url(), None);

    Ok(())
}

#[tokio::test]
async fn edit_mode_prefills_every_field() -> anyhow::Result<()> {
    let service = FakeService::default();
    let record = mock::sample_machine();

    let form = MachineForm::load(&service, Some(record.id)).await?;

    assert_eq!(form.mode, FormMode::Edit(record.id));
    assert_eq!(service.calls.borrow().machine_fetches, vec![record.id]);
    assert_eq!(form.fields.chassis_number, record.chassis_number);
    assert_eq!(form.fields.machine_type_id, Some(record.machine_type_id));
    assert_eq!(form.fields.model, record.model);
    assert_eq!(form.fields.state_id, Some(record.state_id));
    assert_eq!(form.fields.value(Field::HourMeter), "1250.5");
    assert_eq!(form.fields.company_id, Some(record.company_id));
    assert_eq!(form.fields.brand_id, Some(record.brand_id));
    assert_eq!(form.image.preview_url(), record.image_url.as_deref());
    assert_eq!(form.image.file_name(), record.image_name.as_deref());
    // The stored image is displayed, not resent.
    assert_eq!(form.image.selected(), None);

    Ok(())
}

#[tokio::test]
async fn any_failing_list_fails_the_load() {
    for list in ["brands", "machine_types", "machine_states", "companies"] {
        let service = FakeService::failing_list(list);

        let result = MachineForm::load(&service, None).await;

        assert!(
            matches!(result, Err(LoadError::ReferenceData(_))),
            "failing {list} should fail the load"
        );
    }
}

#[tokio::test]
async fn missing_record_fails_the_load() {
    let service = FakeService::default();

    let result = MachineForm::load(&service, Some(MachineId(77))).await;

    match result {
        Err(LoadError::Machine { machine_id, .. }) => {
            assert_eq!(machine_id, MachineId(77))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn unloaded_form_is_uninitialized() {
    let form = MachineForm::default();
    assert_eq!(form.mode, FormMode::Uninitialized);
    assert!(!form.mode.is_ready());
    assert!(!form.submitted());
}
