//! Domain layer: request and response types for SuperSMS (no I/O).

mod request;
mod response;
mod value;

pub use request::{
    GET_CODE_PATH, GET_NUMBER_PATH, GetCode, GetNumber, RELEASE_NUMBER_PATH, ReleaseNumber,
};
pub use response::{CodeDetail, ExtraFields, NumberDetail, ReleaseDetail};
pub use value::{ANY, ApiKey, Phone, Referral, Selector, TaskId};
