use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Poll period of the reminder monitor in seconds. Schedule matching
    /// has minute granularity, so anything other than 60 only makes
    /// sense in tests.
    pub reminder_check_interval_secs: u64,
    /// Seconds until a platform alert auto-dismisses
    pub alert_dismiss_secs: u64,
    /// Seconds until the in-app banner auto-dismisses
    pub banner_dismiss_secs: u64,
    /// Asset played on the audio cue channel
    pub notification_sound: String,
    /// Fixed playback volume for the audio cue
    pub notification_volume: f32,
    /// Push gateway delivering platform alerts, if one is registered
    pub push_gateway_url: Option<String>,
    /// Webhook notified for reminders with the caregiver flag set
    pub caregiver_webhook_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_interval = 60;
        let reminder_check_interval_secs = match std::env::var("REMINDER_CHECK_INTERVAL_SECS") {
            Ok(interval) => match interval.parse::<u64>() {
                Ok(interval) if interval > 0 => interval,
                _ => {
                    warn!(
                        "The given REMINDER_CHECK_INTERVAL_SECS: {} is not valid, falling back to the default interval: {} seconds.",
                        interval, default_interval
                    );
                    default_interval
                }
            },
            Err(_) => default_interval,
        };

        Self {
            port,
            reminder_check_interval_secs,
            alert_dismiss_secs: 30,
            banner_dismiss_secs: 10,
            notification_sound: "/notification-sound.mp3".into(),
            notification_volume: 0.5,
            push_gateway_url: std::env::var("PUSH_GATEWAY_URL").ok(),
            caregiver_webhook_url: std::env::var("CAREGIVER_WEBHOOK_URL").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
