mod backend;
mod fake;
mod lifecycle;
mod submission;

use machine_form::{FormMode, MachineForm};
use test_helpers::{mock, spawn_backend};

#[tokio::test]
async fn form_loads_against_the_mock_backend() -> anyhow::Result<()> {
    let backend = spawn_backend().await;

    let form = MachineForm::load(&backend.client, None).await?;

    assert_eq!(form.mode, FormMode::Create);
    assert_eq!(form.reference.brands, mock::brands());

    Ok(())
}
