use crate::shared::usecase::UseCase;
use sanjeevni_domain::{Reminder, ID};
use sanjeevni_infra::{ReminderFeed, SanjeevniContext};

/// Opens a live-update channel for a user's reminder set. The current
/// set is returned up front and every committed mutation afterwards
/// delivers a fresh snapshot on the feed. Dropping the feed is the
/// unsubscribe.
///
/// This is an in-process operation for the hosting application, not an
/// HTTP endpoint.
#[derive(Debug)]
pub struct SubscribeRemindersUseCase {
    pub user_id: ID,
}

pub struct ReminderSubscription {
    pub current: Vec<Reminder>,
    pub feed: ReminderFeed,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubscribeRemindersUseCase {
    type Response = ReminderSubscription;

    type Error = UseCaseError;

    const NAME: &'static str = "SubscribeReminders";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        // Subscribe before reading so no committed mutation can fall
        // between the initial set and the first feed event
        let feed = ctx.subscriptions.subscribe(&self.user_id);
        let current = ctx
            .repos
            .reminders
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(ReminderSubscription { current, feed })
    }
}
