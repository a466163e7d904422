use crate::shared::entity::{Entity, ID};
use crate::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Active,
    Paused,
}

/// A `Reminder` represents one medication a user should be reminded to
/// take at one or more clock times every day.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The user owning this `Reminder` and receiving its notifications
    pub user_id: ID,
    /// Display name of the medication
    pub name: String,
    /// Free-text dosage, e.g. "1 tablet"
    pub dosage: String,
    /// Free-text frequency label, e.g. "Twice daily"
    pub frequency: String,
    /// Sorted, deduplicated schedule of daily clock times
    pub times: Vec<TimeOfDay>,
    /// Remaining doses in stock
    pub stock: u32,
    pub notes: Option<String>,
    /// Whether the caregiver webhook should also be notified when due
    pub caregiver_notify: bool,
    pub status: ReminderStatus,
    pub taken_today: bool,
    /// Timestamp in millis of the last dose taken
    pub last_taken: Option<i64>,
    pub created: i64,
    pub updated: i64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReminderValidationError {
    #[error("Reminder name cannot be empty")]
    EmptyName,
    #[error("Reminder dosage cannot be empty")]
    EmptyDosage,
    #[error("Reminder must have at least one schedule time")]
    NoScheduleTimes,
}

impl Reminder {
    pub fn new(user_id: ID, now: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            name: String::new(),
            dosage: String::new(),
            frequency: String::new(),
            times: Vec::new(),
            stock: 0,
            notes: None,
            caregiver_notify: false,
            status: ReminderStatus::Active,
            taken_today: false,
            last_taken: None,
            created: now,
            updated: now,
        }
    }

    /// Replaces the schedule. Duplicate entries are collapsed so that a
    /// wall-clock minute can match at most once.
    pub fn set_times(&mut self, mut times: Vec<TimeOfDay>) {
        times.sort();
        times.dedup();
        self.times = times;
    }

    /// Whether this reminder is due at the given wall-clock minute.
    /// Paused reminders are never due.
    pub fn is_due_at(&self, time: TimeOfDay) -> bool {
        self.status == ReminderStatus::Active && self.times.contains(&time)
    }

    /// Records a taken dose. Stock decrements saturate at zero.
    pub fn take_dose(&mut self, now: i64) {
        self.taken_today = true;
        self.last_taken = Some(now);
        self.stock = self.stock.saturating_sub(1);
        self.updated = now;
    }

    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.name.trim().is_empty() {
            return Err(ReminderValidationError::EmptyName);
        }
        if self.dosage.trim().is_empty() {
            return Err(ReminderValidationError::EmptyDosage);
        }
        if self.times.is_empty() {
            return Err(ReminderValidationError::NoScheduleTimes);
        }
        Ok(())
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_reminder() -> Reminder {
        let mut reminder = Reminder::new(Default::default(), 0);
        reminder.name = "Paracetamol".into();
        reminder.dosage = "1 tablet".into();
        reminder.frequency = "Twice daily".into();
        reminder.set_times(vec![
            "8:00 AM".parse().unwrap(),
            "8:00 PM".parse().unwrap(),
        ]);
        reminder.stock = 10;
        reminder
    }

    #[test]
    fn validates_required_fields() {
        assert!(valid_reminder().validate().is_ok());

        let mut reminder = valid_reminder();
        reminder.name = "  ".into();
        assert_eq!(reminder.validate(), Err(ReminderValidationError::EmptyName));

        let mut reminder = valid_reminder();
        reminder.dosage = "".into();
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::EmptyDosage)
        );

        let mut reminder = valid_reminder();
        reminder.times = Vec::new();
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::NoScheduleTimes)
        );
    }

    #[test]
    fn matches_only_exact_schedule_entries() {
        let reminder = valid_reminder();
        assert!(reminder.is_due_at("8:00 AM".parse().unwrap()));
        assert!(reminder.is_due_at("8:00 PM".parse().unwrap()));
        assert!(!reminder.is_due_at("8:01 AM".parse().unwrap()));
        assert!(!reminder.is_due_at("7:59 AM".parse().unwrap()));
    }

    #[test]
    fn paused_reminders_are_never_due() {
        let mut reminder = valid_reminder();
        reminder.status = ReminderStatus::Paused;
        assert!(!reminder.is_due_at("8:00 AM".parse().unwrap()));
    }

    #[test]
    fn duplicate_schedule_entries_are_collapsed() {
        let mut reminder = valid_reminder();
        reminder.set_times(vec![
            "8:00 AM".parse().unwrap(),
            "8:00 AM".parse().unwrap(),
            "9:00 AM".parse().unwrap(),
        ]);
        assert_eq!(reminder.times.len(), 2);
    }

    #[test]
    fn take_dose_decrements_stock_with_floor_at_zero() {
        let mut reminder = valid_reminder();
        reminder.stock = 1;

        reminder.take_dose(100);
        assert_eq!(reminder.stock, 0);
        assert!(reminder.taken_today);
        assert_eq!(reminder.last_taken, Some(100));

        reminder.take_dose(200);
        assert_eq!(reminder.stock, 0);
        assert_eq!(reminder.last_taken, Some(200));
    }
}
