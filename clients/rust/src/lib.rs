mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
pub use sanjeevni_api_structs::dtos::*;
pub use sanjeevni_domain::{ReminderStatus, TimeOfDay, ID};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use sanjeevni_api_structs::dtos::ReminderDTO as Reminder;

/// Sanjeevni Server SDK
///
/// The SDK contains methods for interacting with the Sanjeevni reminder
/// server API.
#[derive(Clone)]
pub struct SanjeevniSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl SanjeevniSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
