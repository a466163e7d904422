use crate::shared::usecase::UseCase;
use sanjeevni_domain::{Reminder, TimeOfDay, ID};
use sanjeevni_infra::SanjeevniContext;

/// The pure matching step of the reminder monitor: which of the user's
/// reminders are due at the sampled wall-clock minute. No side effects
/// and no mutation; notification delivery is the monitor's concern.
#[derive(Debug)]
pub struct GetDueRemindersUseCase {
    pub user_id: ID,
    /// The wall-clock sample to match the schedules against
    pub at: TimeOfDay,
}

#[derive(Debug)]
pub struct DueReminder {
    pub reminder: Reminder,
    pub matched_time: TimeOfDay,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDueRemindersUseCase {
    type Response = Vec<DueReminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDueReminders";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let at = self.at;
        Ok(reminders
            .into_iter()
            .filter(|reminder| reminder.is_due_at(at))
            .map(|reminder| DueReminder {
                reminder,
                matched_time: at,
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use sanjeevni_domain::ReminderStatus;
    use sanjeevni_infra::setup_context;

    async fn insert_reminder(
        ctx: &SanjeevniContext,
        user_id: &ID,
        times: Vec<&str>,
    ) -> Reminder {
        let mut reminder = Reminder::new(user_id.clone(), 0);
        reminder.name = "Paracetamol".into();
        reminder.dosage = "1 tablet".into();
        reminder.set_times(times.into_iter().map(|t| t.parse().unwrap()).collect());
        reminder.stock = 10;
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        reminder
    }

    #[actix_web::test]
    async fn reports_a_reminder_exactly_at_its_schedule_entries() {
        let ctx = setup_context();
        let user_id = ID::new();
        let reminder = insert_reminder(&ctx, &user_id, vec!["8:00 AM", "8:00 PM"]).await;

        for (at, expected) in [
            ("8:00 AM", 1),
            ("8:01 AM", 0),
            ("7:59 AM", 0),
            ("8:00 PM", 1),
        ] {
            let usecase = GetDueRemindersUseCase {
                user_id: user_id.clone(),
                at: at.parse().unwrap(),
            };
            let due = execute(usecase, &ctx).await.unwrap();
            assert_eq!(due.len(), expected, "sampled at {}", at);
            if expected == 1 {
                assert_eq!(due[0].reminder.id, reminder.id);
                assert_eq!(due[0].matched_time, at.parse().unwrap());
            }
        }
    }

    #[actix_web::test]
    async fn repeated_checks_at_unscheduled_minutes_stay_empty() {
        let ctx = setup_context();
        let user_id = ID::new();
        insert_reminder(&ctx, &user_id, vec!["8:00 AM"]).await;

        for _ in 0..3 {
            let usecase = GetDueRemindersUseCase {
                user_id: user_id.clone(),
                at: "9:15 AM".parse().unwrap(),
            };
            assert!(execute(usecase, &ctx).await.unwrap().is_empty());
        }
    }

    #[actix_web::test]
    async fn skips_paused_reminders_and_other_users() {
        let ctx = setup_context();
        let user_id = ID::new();

        let mut paused = insert_reminder(&ctx, &user_id, vec!["8:00 AM"]).await;
        paused.status = ReminderStatus::Paused;
        ctx.repos.reminders.save(&paused).await.unwrap();

        // Same schedule, different owner
        insert_reminder(&ctx, &ID::new(), vec!["8:00 AM"]).await;

        let usecase = GetDueRemindersUseCase {
            user_id: user_id.clone(),
            at: "8:00 AM".parse().unwrap(),
        };
        assert!(execute(usecase, &ctx).await.unwrap().is_empty());
    }
}
