use crate::base::{APIResponse, BaseClient};
use sanjeevni_api_structs::*;
use sanjeevni_domain::{ReminderStatus, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub user_id: ID,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Schedule times in the 12-hour UI format, e.g. "8:00 AM"
    pub times: Vec<String>,
    pub stock: u32,
    pub notes: Option<String>,
    pub caregiver_notify: bool,
}

#[derive(Default)]
pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub times: Option<Vec<String>>,
    pub stock: Option<u32>,
    pub notes: Option<String>,
    pub caregiver_notify: Option<bool>,
    pub status: Option<ReminderStatus>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            name: input.name,
            dosage: input.dosage,
            frequency: input.frequency,
            times: input.times,
            stock: input.stock,
            notes: input.notes,
            caregiver_notify: input.caregiver_notify,
        };
        self.base
            .post(
                body,
                format!("users/{}/reminders", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get_for_user(&self, user_id: ID) -> APIResponse<get_reminders::APIResponse> {
        self.base
            .get(format!("users/{}/reminders", user_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            name: input.name,
            dosage: input.dosage,
            frequency: input.frequency,
            times: input.times,
            stock: input.stock,
            notes: input.notes,
            caregiver_notify: input.caregiver_notify,
            status: input.status,
        };
        self.base
            .put(
                body,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn take_dose(&self, reminder_id: ID) -> APIResponse<take_dose::APIResponse> {
        self.base
            .post(
                serde_json::json!({}),
                format!("reminders/{}/taken", reminder_id),
                StatusCode::OK,
            )
            .await
    }
}
