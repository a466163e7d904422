use crate::dtos::ReminderDTO;
use sanjeevni_domain::{Reminder, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub dosage: String,
        #[serde(default)]
        pub frequency: String,
        /// Schedule times in the 12-hour UI format, e.g. "8:00 AM"
        pub times: Vec<String>,
        pub stock: u32,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub caregiver_notify: bool,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod get_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub dosage: Option<String>,
        #[serde(default)]
        pub frequency: Option<String>,
        #[serde(default)]
        pub times: Option<Vec<String>>,
        #[serde(default)]
        pub stock: Option<u32>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub caregiver_notify: Option<bool>,
        #[serde(default)]
        pub status: Option<ReminderStatus>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    /// Deletes are idempotent: `reminder` is `None` when the id was
    /// already absent, and that is still a success.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: Option<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminder: Option<Reminder>) -> Self {
            Self {
                reminder: reminder.map(ReminderDTO::new),
            }
        }
    }
}

pub mod take_dose {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}
