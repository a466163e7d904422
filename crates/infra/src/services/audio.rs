use crate::subscription::{FeedEvent, ReminderSubscriptions};
use sanjeevni_domain::ID;

/// Capability playing the notification sound. Strictly best-effort:
/// the notifier logs failures and moves on.
pub trait IAudioCue: Send + Sync {
    fn play(&self) -> anyhow::Result<()>;
}

/// Publishes a sound directive on the user's live feed; the hosting UI
/// performs the actual playback of the fixed asset.
pub struct FeedAudioCue {
    subscriptions: ReminderSubscriptions,
    user_id: ID,
    asset: String,
    volume: f32,
}

impl FeedAudioCue {
    pub fn new(
        subscriptions: ReminderSubscriptions,
        user_id: ID,
        asset: String,
        volume: f32,
    ) -> Self {
        Self {
            subscriptions,
            user_id,
            asset,
            volume,
        }
    }
}

impl IAudioCue for FeedAudioCue {
    fn play(&self) -> anyhow::Result<()> {
        self.subscriptions.publish(
            &self.user_id,
            FeedEvent::Sound {
                asset: self.asset.clone(),
                volume: self.volume,
            },
        );
        Ok(())
    }
}
