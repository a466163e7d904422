use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use sanjeevni_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let res = find_by(&self.reminders, |reminder| reminder.user_id == *user_id);
        Ok(res)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let deleted = find_and_delete_by(&self.reminders, |reminder| reminder.user_id == *user_id);
        Ok(DeleteResult {
            deleted_count: deleted.len() as i64,
        })
    }
}
