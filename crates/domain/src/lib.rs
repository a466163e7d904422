mod reminder;
mod shared;
mod time_of_day;

pub use reminder::{Reminder, ReminderStatus, ReminderValidationError};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use time_of_day::{InvalidTimeOfDayError, TimeOfDay};
