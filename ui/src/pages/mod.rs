pub mod information;
pub mod machine_registration;
pub mod not_found;

pub use information::InformationPage;
pub use machine_registration::MachineRegistrationPage;
pub use not_found::NotFoundPage;
