use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use sanjeevni_api_structs::get_reminders::{APIResponse, PathParams};
use sanjeevni_domain::{Reminder, ID};
use sanjeevni_infra::SanjeevniContext;

pub async fn get_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<SanjeevniContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetRemindersUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub user_id: ID,
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
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
