use crate::domain::value::{Phone, Selector, TaskId};

/// Endpoint path answering code lookups.
pub const GET_CODE_PATH: &str = "getcode";

/// Endpoint path used for number release.
///
/// SuperSMS is called on `getcode` here, the same path as [`GET_CODE_PATH`],
/// with `phone` instead of `taskid`. No dedicated release path is known.
pub const RELEASE_NUMBER_PATH: &str = GET_CODE_PATH;

/// Endpoint path provisioning activation numbers.
pub const GET_NUMBER_PATH: &str = "getnumber";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fetch the verification code received for a task.
pub struct GetCode {
    task_id: TaskId,
}

impl GetCode {
    pub fn new(task_id: impl Into<TaskId>) -> Self {
        Self {
            task_id: task_id.into(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Hand an activation number back to the service.
pub struct ReleaseNumber {
    phone: Phone,
}

impl ReleaseNumber {
    pub fn new(phone: impl Into<Phone>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Acquire an activation number from a channel/country/product pool.
///
/// `Default` selects [`Selector::any`] for every field.
pub struct GetNumber {
    channel: Selector,
    country: Selector,
    pid: Selector,
}

impl GetNumber {
    /// Query parameter name for the operator pool (`channel`).
    pub const CHANNEL_FIELD: &'static str = "channel";
    /// Query parameter name for the country code (`country`).
    pub const COUNTRY_FIELD: &'static str = "country";
    /// Query parameter name for the product identifier (`pid`).
    pub const PID_FIELD: &'static str = "pid";

    pub fn new(
        channel: impl Into<Selector>,
        country: impl Into<Selector>,
        pid: impl Into<Selector>,
    ) -> Self {
        Self {
            channel: channel.into(),
            country: country.into(),
            pid: pid.into(),
        }
    }

    pub fn channel(&self) -> &Selector {
        &self.channel
    }

    pub fn country(&self) -> &Selector {
        &self.country
    }

    pub fn pid(&self) -> &Selector {
        &self.pid
    }
}
