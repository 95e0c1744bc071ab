use payloads::{MachineId, MachineRecord, requests::MachineSubmission};

use crate::{
    AbortReason, Field, FieldError, FormMode, ImagePicker, LoadError,
    MachineFields, MachineryService, Operation, ReferenceData, Resolution,
    SubmissionOutcome, dispatch, load_reference_data, resolve_mode,
};

/// State of one activation of the registration page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MachineForm {
    pub mode: FormMode,
    pub reference: ReferenceData,
    pub fields: MachineFields,
    pub image: ImagePicker,
    submitted: bool,
}

impl MachineForm {
    /// Activate the form: load the reference lists, then resolve the mode
    /// from the optional route id and pre-fill the fields when editing.
    pub async fn load<S: MachineryService>(
        service: &S,
        route_id: Option<MachineId>,
    ) -> Result<Self, LoadError> {
        let reference = load_reference_data(service).await?;
        let mut form = Self {
            reference,
            ..Self::default()
        };

        match resolve_mode(service, route_id).await? {
            Resolution::Create => form.mode = FormMode::Create,
            Resolution::Edit(record) => form.apply_record(record),
        }

        Ok(form)
    }

    /// Pre-fill every field from a stored record and switch to edit mode for
    /// its id.
    pub fn apply_record(&mut self, record: MachineRecord) {
        self.fields = MachineFields::from_record(&record);
        self.image.show_stored(record.image_url, record.image_name);
        self.mode = FormMode::Edit(record.id);
    }

    /// Whether a submit was attempted; inline errors are only shown after.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// The error to display next to `field`.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if !self.submitted {
            return None;
        }
        self.fields.errors().get(field)
    }

    /// Validate and assemble the payload, marking the form as submitted
    /// whatever the result.
    pub fn prepare_submission(
        &mut self,
    ) -> Result<(Operation, MachineSubmission), AbortReason> {
        self.submitted = true;

        let operation = match self.mode {
            FormMode::Uninitialized => return Err(AbortReason::NotReady),
            FormMode::Create => Operation::Create,
            FormMode::Edit(_) => Operation::Update,
        };
        if self.image.is_reading() {
            return Err(AbortReason::ImageReading);
        }

        let validated = self.fields.validate().map_err(|errors| {
            tracing::debug!(errors = errors.len(), "Form is invalid");
            AbortReason::Invalid(errors)
        })?;

        let submission = validated.into_submission(
            self.mode.machine_id(),
            self.image.selected().cloned(),
        );
        Ok((operation, submission))
    }

    /// Run a whole submission: validate, dispatch, classify.
    pub async fn submit<S: MachineryService>(
        &mut self,
        service: &S,
    ) -> SubmissionOutcome {
        match self.prepare_submission() {
            Ok((operation, submission)) => {
                dispatch(service, operation, submission).await
            }
            Err(reason) => SubmissionOutcome::Aborted(reason),
        }
    }
}
