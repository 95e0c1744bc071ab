use payloads::{Brand, Company, MachineState, MachineType};

use crate::{LoadError, MachineryService};

/// Dropdown sources, stored exactly as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceData {
    pub brands: Vec<Brand>,
    pub machine_types: Vec<MachineType>,
    pub machine_states: Vec<MachineState>,
    pub companies: Vec<Company>,
}

/// Fetch the four reference lists concurrently. The first failure aborts the
/// whole load.
pub async fn load_reference_data<S: MachineryService>(
    service: &S,
) -> Result<ReferenceData, LoadError> {
    let (brands, machine_types, machine_states, companies) = futures::try_join!(
        service.list_brands(),
        service.list_machine_types(),
        service.list_machine_states(),
        service.list_companies(),
    )
    .map_err(|e| {
        tracing::warn!("Failed to load reference data: {e}");
        LoadError::ReferenceData(e)
    })?;

    tracing::debug!(
        brands = brands.len(),
        machine_types = machine_types.len(),
        machine_states = machine_states.len(),
        companies = companies.len(),
        "Loaded reference data"
    );

    Ok(ReferenceData {
        brands,
        machine_types,
        machine_states,
        companies,
    })
}
