use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use sanjeevni_api_structs::get_reminder::{APIResponse, PathParams};
use sanjeevni_domain::{Reminder, ID};
use sanjeevni_infra::SanjeevniContext;

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<SanjeevniContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))
    }
}
