mod create_reminder;
mod delete_reminder;
pub mod get_due_reminders;
mod get_reminder;
mod get_reminders;
pub mod subscribe_reminders;
mod subscribers;
mod take_dose;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use take_dose::take_dose_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/users/{user_id}/reminders",
        web::post().to(create_reminder_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders",
        web::get().to(get_reminders_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}/taken",
        web::post().to(take_dose_controller),
    );
}
