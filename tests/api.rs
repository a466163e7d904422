mod helpers;

use helpers::setup::spawn_app;
use sanjeevni_sdk::{CreateReminderInput, ReminderStatus, UpdateReminderInput, ID};

fn metformin_input(user_id: ID) -> CreateReminderInput {
    CreateReminderInput {
        user_id,
        name: "Metformin".into(),
        dosage: "500mg".into(),
        frequency: "Twice daily".into(),
        times: vec!["8:00 AM".into(), "8:00 PM".into()],
        stock: 30,
        notes: Some("With food".into()),
        caregiver_notify: false,
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_create_and_list_reminders() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::default();

    let res = sdk
        .reminder
        .create(metformin_input(user_id.clone()))
        .await
        .expect("Expected to create reminder");
    assert_eq!(res.reminder.name, "Metformin");
    assert_eq!(res.reminder.times_display, vec!["8:00 AM", "8:00 PM"]);
    assert_eq!(res.reminder.stock, 30);
    assert!(!res.reminder.taken_today);

    let list = sdk
        .reminder
        .get_for_user(user_id)
        .await
        .expect("Expected to list reminders");
    assert_eq!(list.reminders.len(), 1);
    assert_eq!(list.reminders[0].id, res.reminder.id);

    let fetched = sdk
        .reminder
        .get(res.reminder.id.clone())
        .await
        .expect("Expected to get reminder");
    assert_eq!(fetched.reminder.id, res.reminder.id);
}

#[actix_web::test]
async fn test_reminders_are_scoped_to_their_owner() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::default();
    let other_user_id = ID::default();

    sdk.reminder
        .create(metformin_input(user_id))
        .await
        .expect("Expected to create reminder");

    let list = sdk
        .reminder
        .get_for_user(other_user_id)
        .await
        .expect("Expected to list reminders");
    assert!(list.reminders.is_empty());
}

#[actix_web::test]
async fn test_rejects_invalid_reminders() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::default();

    let mut unnamed = metformin_input(user_id.clone());
    unnamed.name = "".into();
    assert!(sdk.reminder.create(unnamed).await.is_err());

    let mut unscheduled = metformin_input(user_id.clone());
    unscheduled.times = Vec::new();
    assert!(sdk.reminder.create(unscheduled).await.is_err());

    let mut garbled = metformin_input(user_id.clone());
    garbled.times = vec!["25:61".into()];
    assert!(sdk.reminder.create(garbled).await.is_err());

    // Nothing was stored
    let list = sdk
        .reminder
        .get_for_user(user_id)
        .await
        .expect("Expected to list reminders");
    assert!(list.reminders.is_empty());
}

#[actix_web::test]
async fn test_update_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::default();

    let res = sdk
        .reminder
        .create(metformin_input(user_id))
        .await
        .expect("Expected to create reminder");

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: res.reminder.id.clone(),
            dosage: Some("850mg".into()),
            times: Some(vec!["9:30 AM".into()]),
            status: Some(ReminderStatus::Paused),
            ..Default::default()
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(updated.reminder.dosage, "850mg");
    assert_eq!(updated.reminder.times_display, vec!["9:30 AM"]);
    assert_eq!(updated.reminder.status, ReminderStatus::Paused);
    // Untouched fields are kept
    assert_eq!(updated.reminder.name, "Metformin");

    assert!(sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: ID::default(),
            ..Default::default()
        })
        .await
        .is_err());
}

#[actix_web::test]
async fn test_take_dose() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::default();

    let res = sdk
        .reminder
        .create(metformin_input(user_id))
        .await
        .expect("Expected to create reminder");

    let taken = sdk
        .reminder
        .take_dose(res.reminder.id)
        .await
        .expect("Expected to take dose");
    assert_eq!(taken.reminder.stock, 29);
    assert!(taken.reminder.taken_today);
    assert!(taken.reminder.last_taken.is_some());
}

#[actix_web::test]
async fn test_delete_reminder_is_idempotent() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::default();

    let res = sdk
        .reminder
        .create(metformin_input(user_id.clone()))
        .await
        .expect("Expected to create reminder");

    let deleted = sdk
        .reminder
        .delete(res.reminder.id.clone())
        .await
        .expect("Expected to delete reminder");
    assert!(deleted.reminder.is_some());

    // Deleting the same id again still succeeds
    let deleted = sdk
        .reminder
        .delete(res.reminder.id.clone())
        .await
        .expect("Expected delete to be idempotent");
    assert!(deleted.reminder.is_none());

    assert!(sdk.reminder.get(res.reminder.id).await.is_err());
    let list = sdk
        .reminder
        .get_for_user(user_id)
        .await
        .expect("Expected to list reminders");
    assert!(list.reminders.is_empty());
}
