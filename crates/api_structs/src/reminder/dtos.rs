use sanjeevni_domain::{Reminder, ReminderStatus, TimeOfDay, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Canonical schedule as minute-of-day integers
    pub times: Vec<TimeOfDay>,
    /// The same schedule formatted for display, e.g. "8:00 AM"
    pub times_display: Vec<String>,
    pub stock: u32,
    pub notes: Option<String>,
    pub caregiver_notify: bool,
    pub status: ReminderStatus,
    pub taken_today: bool,
    pub last_taken: Option<i64>,
    pub created: i64,
    pub updated: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            user_id: reminder.user_id.clone(),
            name: reminder.name,
            dosage: reminder.dosage,
            frequency: reminder.frequency,
            times_display: reminder.times.iter().map(|t| t.to_string()).collect(),
            times: reminder.times,
            stock: reminder.stock,
            notes: reminder.notes,
            caregiver_notify: reminder.caregiver_notify,
            status: reminder.status,
            taken_today: reminder.taken_today,
            last_taken: reminder.last_taken,
            created: reminder.created,
            updated: reminder.updated,
        }
    }
}

/// Payload delivered on the alert channels (push gateway, caregiver
/// webhook and the in-app banner feed) when a reminder is due.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderAlertDTO {
    pub reminder: ReminderDTO,
    /// The matched wall-clock minute, formatted for display
    pub matched_time: String,
    pub title: String,
    pub body: String,
    /// Seconds after which the receiving surface should auto-dismiss
    pub dismiss_after_secs: u64,
}

impl ReminderAlertDTO {
    pub fn new(reminder: Reminder, matched_time: TimeOfDay, dismiss_after_secs: u64) -> Self {
        let title = format!("Time for {}", reminder.name);
        let body = format!("Take {} now", reminder.dosage);
        Self {
            reminder: ReminderDTO::new(reminder),
            matched_time: matched_time.to_string(),
            title,
            body,
            dismiss_after_secs,
        }
    }
}
