//! Wire types shared between the machinery registration UI, its tests and the
//! mock backend, plus the HTTP client for the machinery API.

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::{
    ApiResponse, Brand, Company, MachineRecord, MachineState, MachineType,
    ReferenceItem,
};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id type wrappers help ensure we don't mix up ids of different reference
/// lists when building a submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MachineId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BrandId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MachineTypeId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MachineStateId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompanyId(pub i64);
