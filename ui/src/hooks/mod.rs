pub mod use_machine_form;
pub mod use_push_route;

pub use use_machine_form::{LoadStatus, use_machine_form};
pub use use_push_route::use_push_route;
