use super::create_reminder::CreateReminderUseCase;
use super::delete_reminder::DeleteReminderUseCase;
use super::take_dose::TakeDoseUseCase;
use super::update_reminder::UpdateReminderUseCase;
use crate::shared::usecase::Subscriber;
use sanjeevni_domain::{Reminder, ID};
use sanjeevni_infra::{FeedEvent, SanjeevniContext};
use tracing::warn;

/// Pushes a fresh snapshot of the owner's reminder set to the live
/// feed after a committed mutation.
pub struct PublishReminderChange;

async fn publish_snapshot(user_id: &ID, ctx: &SanjeevniContext) {
    match ctx.repos.reminders.find_by_user(user_id).await {
        Ok(reminders) => ctx
            .subscriptions
            .publish(user_id, FeedEvent::Snapshot(reminders)),
        Err(e) => warn!(
            "Unable to push a reminder snapshot for user: {}. Error: {:?}",
            user_id, e
        ),
    }
}

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for PublishReminderChange {
    async fn notify(&self, e: &Reminder, ctx: &SanjeevniContext) {
        publish_snapshot(&e.user_id, ctx).await;
    }
}

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateReminderUseCase> for PublishReminderChange {
    async fn notify(&self, e: &Reminder, ctx: &SanjeevniContext) {
        publish_snapshot(&e.user_id, ctx).await;
    }
}

#[async_trait::async_trait(?Send)]
impl Subscriber<TakeDoseUseCase> for PublishReminderChange {
    async fn notify(&self, e: &Reminder, ctx: &SanjeevniContext) {
        publish_snapshot(&e.user_id, ctx).await;
    }
}

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteReminderUseCase> for PublishReminderChange {
    async fn notify(&self, deleted: &Option<Reminder>, ctx: &SanjeevniContext) {
        // Nothing changed when the id was already absent
        if let Some(reminder) = deleted {
            publish_snapshot(&reminder.user_id, ctx).await;
        }
    }
}
