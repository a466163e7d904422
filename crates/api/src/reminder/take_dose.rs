use crate::error::ApiError;
use crate::reminder::subscribers::PublishReminderChange;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use sanjeevni_api_structs::take_dose::{APIResponse, PathParams};
use sanjeevni_domain::{Reminder, ID};
use sanjeevni_infra::SanjeevniContext;

pub async fn take_dose_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<SanjeevniContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = TakeDoseUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

/// Marks the reminder as taken and decrements its stock.
#[derive(Debug)]
pub struct TakeDoseUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for TakeDoseUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "TakeDose";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        reminder.take_dose(ctx.sys.get_timestamp_millis());

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishReminderChange)]
    }
}
