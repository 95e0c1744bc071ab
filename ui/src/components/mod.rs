pub mod form_fields;
pub mod machine_image_input;
pub mod modal;
pub mod outcome_dialog;
pub mod toast;

pub use form_fields::{SelectField, SelectOption, TextField};
pub use machine_image_input::{ImageSelection, MachineImageInput};
pub use modal::Modal;
pub use outcome_dialog::OutcomeDialog;
pub use toast::ToastContainer;
