use crate::notifier::Notifier;
use crate::reminder::get_due_reminders::GetDueRemindersUseCase;
use crate::shared::usecase::execute;
use sanjeevni_domain::ID;
use sanjeevni_infra::{LocalMinute, SanjeevniContext};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Seconds until the next full wall-clock minute. Schedule matching has
/// minute granularity, so the monitor aligns its first check to a
/// minute boundary before settling into its fixed interval.
pub fn get_start_delay(now_ts_millis: i64) -> u64 {
    let secs_in_minute = 60;
    let second = now_ts_millis / 1000 % secs_in_minute;
    (secs_in_minute - second) as u64
}

/// Per-session poller matching one user's reminder schedules against
/// the local wall clock and handing matches to the [`Notifier`].
///
/// A session owns exactly one monitor. `start` replaces any running
/// poll loop and `stop` (or dropping the monitor) tears it down, so an
/// ended session never leaks a ticking task.
pub struct ReminderMonitor {
    ctx: SanjeevniContext,
    notifier: Arc<Notifier>,
    handle: Option<actix_web::rt::task::JoinHandle<()>>,
}

impl ReminderMonitor {
    pub fn new(ctx: SanjeevniContext, notifier: Arc<Notifier>) -> Self {
        Self {
            ctx,
            notifier,
            handle: None,
        }
    }

    /// Starts the poll loop for the given user, stopping a previous one
    /// first.
    pub fn start(&mut self, user_id: ID) {
        self.stop();

        let ctx = self.ctx.clone();
        let notifier = self.notifier.clone();
        let handle = actix_web::rt::spawn(async move {
            let delay = get_start_delay(ctx.sys.get_timestamp_millis());
            tokio::time::sleep(Duration::from_secs(delay)).await;

            info!("Starting the reminder monitor for user: {}", user_id);
            let fired = Arc::new(Mutex::new(HashMap::new()));
            let mut interval = tokio::time::interval(Duration::from_secs(
                ctx.config.reminder_check_interval_secs,
            ));
            loop {
                interval.tick().await;
                actix_web::rt::spawn(check_due_reminders(
                    user_id.clone(),
                    ctx.clone(),
                    notifier.clone(),
                    fired.clone(),
                ));
            }
        });
        self.handle = Some(handle);
    }

    /// Stops the poll loop. Safe to call when the monitor is idle.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ReminderMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One monitor tick: sample the local minute, match the user's
/// schedules against it and notify each due reminder at most once per
/// wall-clock minute.
///
/// The `fired` mutex doubles as the in-flight guard. A tick that finds
/// it locked means the previous check has not finished yet and skips,
/// so delivery work never overlaps.
pub(crate) async fn check_due_reminders(
    user_id: ID,
    ctx: SanjeevniContext,
    notifier: Arc<Notifier>,
    fired: Arc<Mutex<HashMap<ID, LocalMinute>>>,
) {
    let mut fired = match fired.try_lock() {
        Ok(fired) => fired,
        Err(_) => {
            debug!("A reminder check is still in flight, skipping this tick");
            return;
        }
    };

    let minute = ctx.sys.local_minute();
    let usecase = GetDueRemindersUseCase {
        user_id,
        at: minute.time,
    };
    // A failed fetch is dropped here, the next tick retries
    let due = match execute(usecase, &ctx).await {
        Ok(due) => due,
        Err(_) => return,
    };

    for entry in due {
        if fired.get(&entry.reminder.id) == Some(&minute) {
            continue;
        }
        fired.insert(entry.reminder.id.clone(), minute);
        notifier.notify(entry.reminder, entry.matched_time).await;
    }
}
