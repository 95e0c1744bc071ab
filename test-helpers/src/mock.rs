//! Seed data for the mock machinery backend.
//!
//! Used by integration tests and by the dev-server, so the UI has realistic
//! dropdown options and one stored machine to edit.

use payloads::{
    Brand, BrandId, Company, CompanyId, MachineId, MachineRecord,
    MachineState, MachineStateId, MachineType, MachineTypeId, ReferenceItem,
};
use rust_decimal::dec;

use crate::BackendState;

pub const SAMPLE_MACHINE_ID: MachineId = MachineId(1);

pub fn brands() -> Vec<Brand> {
    vec![
        item(BrandId(1), "Caterpillar"),
        item(BrandId(2), "Komatsu"),
        item(BrandId(3), "John Deere"),
        item(BrandId(4), "Volvo"),
    ]
}

pub fn machine_types() -> Vec<MachineType> {
    vec![
        item(MachineTypeId(1), "Excavadora"),
        item(MachineTypeId(2), "Retroexcavadora"),
        item(MachineTypeId(3), "Motoniveladora"),
        item(MachineTypeId(4), "Cargador frontal"),
    ]
}

pub fn machine_states() -> Vec<MachineState> {
    vec![
        item(MachineStateId(1), "Operativa"),
        item(MachineStateId(2), "En mantenimiento"),
        item(MachineStateId(3), "Fuera de servicio"),
    ]
}

pub fn companies() -> Vec<Company> {
    vec![
        item(CompanyId(1), "Constructora Andina"),
        item(CompanyId(2), "Movimientos de Tierra del Sur"),
    ]
}

/// The machine stored under [`SAMPLE_MACHINE_ID`].
pub fn sample_machine() -> MachineRecord {
    MachineRecord {
        id: SAMPLE_MACHINE_ID,
        chassis_number: "CAT0320DKBZX01234".to_string(),
        machine_type_id: MachineTypeId(1),
        model: "320D".to_string(),
        state_id: MachineStateId(2),
        hour_meter: dec!(1250.5),
        company_id: CompanyId(1),
        brand_id: BrandId(1),
        image_url: Some("/uploads/maquinaria/1.jpg".to_string()),
        image_name: Some("1.jpg".to_string()),
    }
}

/// Backend state with every reference list and the sample machine.
pub fn seeded_state() -> BackendState {
    let mut state = BackendState {
        brands: brands(),
        machine_types: machine_types(),
        machine_states: machine_states(),
        companies: companies(),
        ..BackendState::default()
    };
    state.insert_machine(sample_machine());
    state
}

fn item<Id>(id: Id, label: &str) -> ReferenceItem<Id> {
    ReferenceItem {
        id,
        label: label.to_string(),
    }
}
