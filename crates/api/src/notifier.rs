use sanjeevni_api_structs::dtos::ReminderAlertDTO;
use sanjeevni_domain::{Reminder, TimeOfDay, ID};
use sanjeevni_infra::{
    CaregiverWebhook, FeedAudioCue, FeedEvent, IAudioCue, IPushGateway, PermissionStatus,
    SanjeevniContext, WebPushGateway,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Fans a due reminder out to the delivery channels of one user's
/// session: the platform alert, the audio cue, the in-app banner and
/// the caregiver webhook. Channels are independent and best-effort, a
/// failing one never blocks the others.
pub struct Notifier {
    user_id: ID,
    permission: PermissionStatus,
    push_gateway: Arc<dyn IPushGateway>,
    audio: Arc<dyn IAudioCue>,
    caregiver_webhook: CaregiverWebhook,
    ctx: SanjeevniContext,
}

impl Notifier {
    /// Creates a notifier for the given user, asking for notification
    /// permission exactly once. A denied or unanswered prompt silences
    /// the platform alert channel for the lifetime of this notifier
    /// while the banner and audio channels keep working.
    pub async fn init(
        user_id: ID,
        push_gateway: Arc<dyn IPushGateway>,
        audio: Arc<dyn IAudioCue>,
        ctx: &SanjeevniContext,
    ) -> Self {
        let permission = push_gateway.request_permission(&user_id).await;
        match permission {
            PermissionStatus::Granted => info!("Notification permission granted for user: {}", user_id),
            _ => warn!(
                "Notification permission not granted for user: {}, platform alerts are disabled",
                user_id
            ),
        }

        Self {
            user_id,
            permission,
            push_gateway,
            audio,
            caregiver_webhook: CaregiverWebhook::new(ctx.config.caregiver_webhook_url.clone()),
            ctx: ctx.clone(),
        }
    }

    /// Notifier wired to the delivery services named in the context
    /// config.
    pub async fn from_context(user_id: ID, ctx: &SanjeevniContext) -> Self {
        let push_gateway = Arc::new(WebPushGateway::new(ctx.config.push_gateway_url.clone()));
        let audio = Arc::new(FeedAudioCue::new(
            ctx.subscriptions.clone(),
            user_id.clone(),
            ctx.config.notification_sound.clone(),
            ctx.config.notification_volume,
        ));
        Self::init(user_id, push_gateway, audio, ctx).await
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    /// Delivers a due reminder on every channel that applies.
    pub async fn notify(&self, reminder: Reminder, matched_time: TimeOfDay) {
        if self.permission == PermissionStatus::Granted {
            let alert = ReminderAlertDTO::new(
                reminder.clone(),
                matched_time,
                self.ctx.config.alert_dismiss_secs,
            );
            match serde_json::to_value(&alert) {
                Ok(payload) => {
                    if let Err(e) = self.push_gateway.send_alert(&self.user_id, &payload).await {
                        warn!(
                            "Unable to deliver a platform alert for reminder: {}. Error: {:?}",
                            reminder.id, e
                        );
                    }
                }
                Err(e) => warn!("Unable to serialize a reminder alert. Error: {:?}", e),
            }
        }

        if let Err(e) = self.audio.play() {
            warn!(
                "Unable to play the notification sound for reminder: {}. Error: {:?}",
                reminder.id, e
            );
        }

        self.ctx.subscriptions.publish(
            &self.user_id,
            FeedEvent::Banner {
                reminder: reminder.clone(),
                matched_time,
                dismiss_after: Duration::from_secs(self.ctx.config.banner_dismiss_secs),
            },
        );

        if reminder.caregiver_notify && self.caregiver_webhook.is_configured() {
            let alert = ReminderAlertDTO::new(
                reminder.clone(),
                matched_time,
                self.ctx.config.alert_dismiss_secs,
            );
            match serde_json::to_value(&alert) {
                Ok(payload) => {
                    if let Err(e) = self
                        .caregiver_webhook
                        .notify(&self.user_id, &payload)
                        .await
                    {
                        warn!(
                            "Unable to notify the caregiver for reminder: {}. Error: {:?}",
                            reminder.id, e
                        );
                    }
                }
                Err(e) => warn!("Unable to serialize a reminder alert. Error: {:?}", e),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sanjeevni_infra::setup_context;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubPushGateway {
        permission: PermissionStatus,
        alerts_sent: AtomicUsize,
    }

    impl StubPushGateway {
        fn new(permission: PermissionStatus) -> Arc<Self> {
            Arc::new(Self {
                permission,
                alerts_sent: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl IPushGateway for StubPushGateway {
        async fn request_permission(&self, _user_id: &ID) -> PermissionStatus {
            self.permission
        }

        async fn send_alert(
            &self,
            _user_id: &ID,
            _payload: &serde_json::Value,
        ) -> anyhow::Result<()> {
            self.alerts_sent.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn due_reminder(user_id: &ID) -> Reminder {
        let mut reminder = Reminder::new(user_id.clone(), 0);
        reminder.name = "Metformin".into();
        reminder.dosage = "500mg".into();
        reminder.set_times(vec![TimeOfDay::from_hm(8, 0).unwrap()]);
        reminder
    }

    #[tokio::test]
    async fn delivers_on_every_channel_when_permission_is_granted() {
        let ctx = setup_context();
        let user_id = ID::default();
        let mut feed = ctx.subscriptions.subscribe(&user_id);

        let push_gateway = StubPushGateway::new(PermissionStatus::Granted);
        let audio = Arc::new(FeedAudioCue::new(
            ctx.subscriptions.clone(),
            user_id.clone(),
            ctx.config.notification_sound.clone(),
            ctx.config.notification_volume,
        ));
        let notifier =
            Notifier::init(user_id.clone(), push_gateway.clone(), audio, &ctx).await;

        let matched_time = TimeOfDay::from_hm(8, 0).unwrap();
        notifier.notify(due_reminder(&user_id), matched_time).await;

        assert_eq!(push_gateway.alerts_sent.load(Ordering::SeqCst), 1);
        assert!(matches!(
            feed.recv().await,
            Some(FeedEvent::Sound { .. })
        ));
        match feed.recv().await {
            Some(FeedEvent::Banner {
                matched_time: banner_time,
                dismiss_after,
                ..
            }) => {
                assert_eq!(banner_time, matched_time);
                assert_eq!(dismiss_after, Duration::from_secs(10));
            }
            other => panic!("Expected a banner event, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn falls_back_silently_when_permission_is_denied() {
        let ctx = setup_context();
        let user_id = ID::default();
        let mut feed = ctx.subscriptions.subscribe(&user_id);

        let push_gateway = StubPushGateway::new(PermissionStatus::Denied);
        let audio = Arc::new(FeedAudioCue::new(
            ctx.subscriptions.clone(),
            user_id.clone(),
            ctx.config.notification_sound.clone(),
            ctx.config.notification_volume,
        ));
        let notifier =
            Notifier::init(user_id.clone(), push_gateway.clone(), audio, &ctx).await;

        notifier
            .notify(due_reminder(&user_id), TimeOfDay::from_hm(8, 0).unwrap())
            .await;

        // The platform alert is skipped but the in-app channels still fire
        assert_eq!(push_gateway.alerts_sent.load(Ordering::SeqCst), 0);
        assert!(matches!(
            feed.recv().await,
            Some(FeedEvent::Sound { .. })
        ));
        assert!(matches!(
            feed.recv().await,
            Some(FeedEvent::Banner { .. })
        ));
    }

    #[tokio::test]
    async fn unanswered_permission_prompt_disables_platform_alerts() {
        let ctx = setup_context();
        let user_id = ID::default();

        let push_gateway = StubPushGateway::new(PermissionStatus::Default);
        let audio = Arc::new(FeedAudioCue::new(
            ctx.subscriptions.clone(),
            user_id.clone(),
            ctx.config.notification_sound.clone(),
            ctx.config.notification_volume,
        ));
        let notifier =
            Notifier::init(user_id.clone(), push_gateway.clone(), audio, &ctx).await;

        notifier
            .notify(due_reminder(&user_id), TimeOfDay::from_hm(8, 0).unwrap())
            .await;

        assert_eq!(notifier.permission(), PermissionStatus::Default);
        assert_eq!(push_gateway.alerts_sent.load(Ordering::SeqCst), 0);
    }
}
