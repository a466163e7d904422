use sanjeevni_domain::{Reminder, TimeOfDay, ID};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::warn;

const CHANNEL_CAPACITY: usize = 16;

/// Events delivered on a user's live feed.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// The full current reminder set of the subscribed user, delivered
    /// after every committed mutation
    Snapshot(Vec<Reminder>),
    /// A due reminder to surface as a transient in-app banner
    Banner {
        reminder: Reminder,
        matched_time: TimeOfDay,
        dismiss_after: Duration,
    },
    /// Directive to play the notification sound
    Sound { asset: String, volume: f32 },
}

/// Live-update channels, one per user, fanning committed store changes
/// and due-reminder events out to subscribed consumers.
///
/// Dropping a `ReminderFeed` releases the subscription; a user's
/// channel is pruned once its last feed is gone.
#[derive(Clone)]
pub struct ReminderSubscriptions {
    channels: Arc<Mutex<HashMap<ID, broadcast::Sender<FeedEvent>>>>,
}

pub struct ReminderFeed {
    receiver: broadcast::Receiver<FeedEvent>,
}

impl ReminderFeed {
    /// The next event on this feed, or `None` once the channel is
    /// closed. Events missed while lagging are skipped.
    pub async fn recv(&mut self) -> Option<FeedEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Reminder feed lagging, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

impl ReminderSubscriptions {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn subscribe(&self, user_id: &ID) -> ReminderFeed {
        let mut channels = self.channels.lock().unwrap();
        let sender = channels
            .entry(user_id.clone())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        ReminderFeed {
            receiver: sender.subscribe(),
        }
    }

    pub fn publish(&self, user_id: &ID, event: FeedEvent) {
        let mut channels = self.channels.lock().unwrap();
        if let Some(sender) = channels.get(user_id) {
            // A send error means every feed was dropped, release the channel
            if sender.send(event).is_err() {
                channels.remove(user_id);
            }
        }
    }

    pub fn subscriber_count(&self, user_id: &ID) -> usize {
        let channels = self.channels.lock().unwrap();
        channels
            .get(user_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}

impl Default for ReminderSubscriptions {
    fn default() -> Self {
        Self::new()
    }
}
