use payloads::{ClientError, MachineId};

/// Failure while activating the form. Either kind leaves the form unusable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("No se pudieron cargar los catálogos: {0}")]
    ReferenceData(#[source] ClientError),
    #[error("No se pudo cargar la máquina {machine_id}: {source}")]
    Machine {
        machine_id: MachineId,
        source: ClientError,
    },
}
