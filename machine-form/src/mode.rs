use payloads::{MachineId, MachineRecord};

use crate::{LoadError, MachineryService};

/// Whether the form creates a new machine or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Activation has not finished (or failed); the form cannot submit.
    #[default]
    Uninitialized,
    Create,
    Edit(MachineId),
}

impl FormMode {
    pub fn is_ready(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    pub fn machine_id(&self) -> Option<MachineId> {
        match self {
            Self::Edit(machine_id) => Some(*machine_id),
            _ => None,
        }
    }
}

/// Result of inspecting the route: nothing to load, or the record to edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Create,
    Edit(MachineRecord),
}

/// Decide between create and edit from the optional route id, fetching the
/// record when editing.
pub async fn resolve_mode<S: MachineryService>(
    service: &S,
    route_id: Option<MachineId>,
) -> Result<Resolution, LoadError> {
    let Some(machine_id) = route_id else {
        tracing::debug!("No machine id in route, creating");
        return Ok(Resolution::Create);
    };

    match service.get_machine(machine_id).await {
        Ok(record) => {
            tracing::debug!(%machine_id, "Loaded machine for editing");
            Ok(Resolution::Edit(record))
        }
        Err(source) => {
            tracing::warn!(%machine_id, "Failed to load machine: {source}");
            Err(LoadError::Machine { machine_id, source })
        }
    }
}
