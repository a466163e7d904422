mod audio;
mod push_gateway;
mod webhook;

pub use audio::{FeedAudioCue, IAudioCue};
pub use push_gateway::{IPushGateway, PermissionStatus, WebPushGateway};
pub use webhook::CaregiverWebhook;
