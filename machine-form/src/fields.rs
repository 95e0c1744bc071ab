use std::collections::BTreeMap;
use std::str::FromStr;

use payloads::{
    BrandId, CompanyId, MachineId, MachineRecord, MachineStateId,
    MachineTypeId,
    requests::{ImageUpload, MachineSubmission, fields},
};
use rust_decimal::Decimal;

/// The seven required inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ChassisNumber,
    MachineType,
    Model,
    State,
    HourMeter,
    Company,
    Brand,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::ChassisNumber,
        Field::MachineType,
        Field::Model,
        Field::State,
        Field::HourMeter,
        Field::Company,
        Field::Brand,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ChassisNumber => "No. de chasis",
            Self::MachineType => "Tipo de máquina",
            Self::Model => "Modelo",
            Self::State => "Estado",
            Self::HourMeter => "Horómetro",
            Self::Company => "Empresa",
            Self::Brand => "Marca",
        }
    }

    /// Name of the multipart field carrying this input; also used as the html
    /// input name.
    pub fn input_name(&self) -> &'static str {
        match self {
            Self::ChassisNumber => fields::CHASSIS_NUMBER,
            Self::MachineType => fields::MACHINE_TYPE,
            Self::Model => fields::MODEL,
            Self::State => fields::STATE,
            Self::HourMeter => fields::HOUR_METER,
            Self::Company => fields::COMPANY,
            Self::Brand => fields::BRAND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidNumber,
    Negative,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "Este campo es obligatorio",
            Self::InvalidNumber => "Ingrese un número válido",
            Self::Negative => "El valor no puede ser negativo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

/// Current input values. Text inputs are kept as typed; dropdowns hold the
/// selected id, `None` while nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MachineFields {
    pub chassis_number: String,
    pub machine_type_id: Option<MachineTypeId>,
    pub model: String,
    pub state_id: Option<MachineStateId>,
    pub hour_meter: String,
    pub company_id: Option<CompanyId>,
    pub brand_id: Option<BrandId>,
}

impl MachineFields {
    pub fn from_record(record: &MachineRecord) -> Self {
        Self {
            chassis_number: record.chassis_number.clone(),
            machine_type_id: Some(record.machine_type_id),
            model: record.model.clone(),
            state_id: Some(record.state_id),
            hour_meter: record.hour_meter.to_string(),
            company_id: Some(record.company_id),
            brand_id: Some(record.brand_id),
        }
    }

    /// Update a field from the raw value of its html input. Dropdown values
    /// that are empty or not an id clear the selection.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::ChassisNumber => self.chassis_number = raw.to_string(),
            Field::MachineType => {
                self.machine_type_id = parse_id(raw).map(MachineTypeId)
            }
            Field::Model => self.model = raw.to_string(),
            Field::State => self.state_id = parse_id(raw).map(MachineStateId),
            Field::HourMeter => self.hour_meter = raw.to_string(),
            Field::Company => self.company_id = parse_id(raw).map(CompanyId),
            Field::Brand => self.brand_id = parse_id(raw).map(BrandId),
        }
    }

    /// The value to show in the html input for `field`.
    pub fn value(&self, field: Field) -> String {
        fn id_or_empty(id: Option<impl ToString>) -> String {
            id.map(|id| id.to_string()).unwrap_or_default()
        }

        match field {
            Field::ChassisNumber => self.chassis_number.clone(),
            Field::MachineType => id_or_empty(self.machine_type_id),
            Field::Model => self.model.clone(),
            Field::State => id_or_empty(self.state_id),
            Field::HourMeter => self.hour_meter.clone(),
            Field::Company => id_or_empty(self.company_id),
            Field::Brand => id_or_empty(self.brand_id),
        }
    }

    pub fn errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors,
        }
    }

    /// Check every required field, collecting all errors rather than stopping
    /// at the first one.
    pub fn validate(&self) -> Result<ValidatedFields, FieldErrors> {
        let mut errors = BTreeMap::new();

        let chassis_number = check(
            &mut errors,
            Field::ChassisNumber,
            required_text(&self.chassis_number),
        );
        let machine_type_id = check(
            &mut errors,
            Field::MachineType,
            required(self.machine_type_id),
        );
        let model =
            check(&mut errors, Field::Model, required_text(&self.model));
        let state_id =
            check(&mut errors, Field::State, required(self.state_id));
        let hour_meter = check(
            &mut errors,
            Field::HourMeter,
            parse_hour_meter(&self.hour_meter),
        );
        let company_id =
            check(&mut errors, Field::Company, required(self.company_id));
        let brand_id =
            check(&mut errors, Field::Brand, required(self.brand_id));

        match (
            chassis_number,
            machine_type_id,
            model,
            state_id,
            hour_meter,
            company_id,
            brand_id,
        ) {
            (
                Some(chassis_number),
                Some(machine_type_id),
                Some(model),
                Some(state_id),
                Some(hour_meter),
                Some(company_id),
                Some(brand_id),
            ) => Ok(ValidatedFields {
                chassis_number,
                machine_type_id,
                model,
                state_id,
                hour_meter,
                company_id,
                brand_id,
            }),
            _ => Err(FieldErrors(errors)),
        }
    }
}

/// Field values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub chassis_number: String,
    pub machine_type_id: MachineTypeId,
    pub model: String,
    pub state_id: MachineStateId,
    pub hour_meter: Decimal,
    pub company_id: CompanyId,
    pub brand_id: BrandId,
}

impl ValidatedFields {
    pub fn into_submission(
        self,
        id: Option<MachineId>,
        image: Option<ImageUpload>,
    ) -> MachineSubmission {
        MachineSubmission {
            id,
            chassis_number: self.chassis_number,
            machine_type_id: self.machine_type_id,
            model: self.model,
            state_id: self.state_id,
            hour_meter: self.hour_meter,
            company_id: self.company_id,
            brand_id: self.brand_id,
            image,
        }
    }
}

fn check<T>(
    errors: &mut BTreeMap<Field, FieldError>,
    field: Field,
    result: Result<T, FieldError>,
) -> Option<T> {
    result.map_err(|e| errors.insert(field, e)).ok()
}

fn required<T>(value: Option<T>) -> Result<T, FieldError> {
    value.ok_or(FieldError::Required)
}

fn required_text(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(trimmed.to_string())
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn parse_hour_meter(raw: &str) -> Result<Decimal, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    let value =
        Decimal::from_str(raw).map_err(|_| FieldError::InvalidNumber)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FieldError::Negative);
    }
    Ok(value)
}
