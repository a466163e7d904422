mod inmemory;

pub use inmemory::InMemoryReminderRepo;
use sanjeevni_domain::{Reminder, ID};

use crate::repos::shared::repo::DeleteResult;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}
