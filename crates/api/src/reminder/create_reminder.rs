use crate::error::ApiError;
use crate::reminder::subscribers::PublishReminderChange;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use sanjeevni_api_structs::create_reminder::{APIResponse, PathParams, RequestBody};
use sanjeevni_domain::{Reminder, ReminderValidationError, TimeOfDay, ID};
use sanjeevni_infra::SanjeevniContext;

pub async fn create_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SanjeevniContext>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        user_id: path_params.user_id.clone(),
        name: body.name,
        dosage: body.dosage,
        frequency: body.frequency,
        times: body.times,
        stock: body.stock,
        notes: body.notes,
        caregiver_notify: body.caregiver_notify,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: ID,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Schedule times in the 12-hour UI format
    pub times: Vec<String>,
    pub stock: u32,
    pub notes: Option<String>,
    pub caregiver_notify: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidScheduleTime(String),
    InvalidReminder(ReminderValidationError),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidScheduleTime(time) => Self::BadClientData(format!(
                "The schedule time: `{}` is not a valid 12-hour clock time",
                time
            )),
            UseCaseError::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        let mut times = Vec::with_capacity(self.times.len());
        for time in &self.times {
            let parsed = time
                .parse::<TimeOfDay>()
                .map_err(|_| UseCaseError::InvalidScheduleTime(time.clone()))?;
            times.push(parsed);
        }

        let mut reminder = Reminder::new(self.user_id.clone(), ctx.sys.get_timestamp_millis());
        reminder.name = self.name.clone();
        reminder.dosage = self.dosage.clone();
        reminder.frequency = self.frequency.clone();
        reminder.set_times(times);
        reminder.stock = self.stock;
        reminder.notes = self.notes.clone();
        reminder.caregiver_notify = self.caregiver_notify;

        // The validation gate runs before any persistence call
        reminder
            .validate()
            .map_err(UseCaseError::InvalidReminder)?;

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishReminderChange)]
    }
}
