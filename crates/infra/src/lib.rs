mod config;
mod repos;
mod services;
mod subscription;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, IReminderRepo, InMemoryReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use subscription::{FeedEvent, ReminderFeed, ReminderSubscriptions};
pub use system::{ISys, LocalMinute};
use system::RealSys;

#[derive(Clone)]
pub struct SanjeevniContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub subscriptions: ReminderSubscriptions,
}

impl SanjeevniContext {
    fn create() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            subscriptions: ReminderSubscriptions::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// The reminder store itself lives behind `IReminderRepo`; the
/// in-memory implementation is the only one shipped here.
pub fn setup_context() -> SanjeevniContext {
    SanjeevniContext::create()
}
