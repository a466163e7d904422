use crate::error::ApiError;
use crate::reminder::subscribers::PublishReminderChange;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use sanjeevni_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use sanjeevni_domain::{Reminder, ReminderStatus, ReminderValidationError, TimeOfDay, ID};
use sanjeevni_infra::SanjeevniContext;

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SanjeevniContext>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        name: body.name,
        dosage: body.dosage,
        frequency: body.frequency,
        times: body.times,
        stock: body.stock,
        notes: body.notes,
        caregiver_notify: body.caregiver_notify,
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

/// Merges the provided fields into the stored reminder. Fields left as
/// `None` keep their current value.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub times: Option<Vec<String>>,
    pub stock: Option<u32>,
    pub notes: Option<String>,
    pub caregiver_notify: Option<bool>,
    pub status: Option<ReminderStatus>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidScheduleTime(String),
    InvalidReminder(ReminderValidationError),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
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
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &SanjeevniContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        if let Some(name) = &self.name {
            reminder.name = name.clone();
        }
        if let Some(dosage) = &self.dosage {
            reminder.dosage = dosage.clone();
        }
        if let Some(frequency) = &self.frequency {
            reminder.frequency = frequency.clone();
        }
        if let Some(times) = &self.times {
            let mut parsed_times = Vec::with_capacity(times.len());
            for time in times {
                let parsed = time
                    .parse::<TimeOfDay>()
                    .map_err(|_| UseCaseError::InvalidScheduleTime(time.clone()))?;
                parsed_times.push(parsed);
            }
            reminder.set_times(parsed_times);
        }
        if let Some(stock) = self.stock {
            reminder.stock = stock;
        }
        if let Some(notes) = &self.notes {
            reminder.notes = Some(notes.clone());
        }
        if let Some(caregiver_notify) = self.caregiver_notify {
            reminder.caregiver_notify = caregiver_notify;
        }
        if let Some(status) = self.status {
            reminder.status = status;
        }

        reminder
            .validate()
            .map_err(UseCaseError::InvalidReminder)?;
        reminder.updated = ctx.sys.get_timestamp_millis();

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
