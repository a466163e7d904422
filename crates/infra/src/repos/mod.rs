mod reminder;
mod shared;

pub use reminder::{IReminderRepo, InMemoryReminderRepo};
pub use shared::repo::DeleteResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
