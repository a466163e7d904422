use crate::error::ApiError;
use crate::reminder::subscribers::PublishReminderChange;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use sanjeevni_api_structs::delete_reminder::{APIResponse, PathParams};
use sanjeevni_domain::{Reminder, ID};
use sanjeevni_infra::SanjeevniContext;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<SanjeevniContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted| HttpResponse::Ok().json(APIResponse::new(deleted)))
        .map_err(ApiError::from)
}

/// Deletes are idempotent: the contract is that the id is absent after
/// the call, so deleting an already absent id is a success.
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Option<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminders.delete(&self.reminder_id).await)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishReminderChange)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sanjeevni_infra::setup_context;

    #[actix_web::test]
    async fn deleting_an_absent_id_is_a_success() {
        let ctx = setup_context();

        let usecase = DeleteReminderUseCase {
            reminder_id: ID::new(),
        };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res, Ok(None));
    }

    #[actix_web::test]
    async fn deletes_an_existing_reminder() {
        let ctx = setup_context();

        let mut reminder = Reminder::new(ID::new(), 0);
        reminder.name = "Paracetamol".into();
        reminder.dosage = "1 tablet".into();
        reminder.set_times(vec!["8:00 AM".parse().unwrap()]);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.clone(),
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.map(|r| r.id), Some(reminder.id.clone()));
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
    }
}
