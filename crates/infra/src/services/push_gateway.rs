use sanjeevni_domain::ID;
use serde::Deserialize;
use tracing::warn;

/// Outcome of the platform notification permission request, asked once
/// per notifier session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user has not answered the permission prompt
    Default,
}

/// Capability delivering platform alerts to a user's devices.
#[async_trait::async_trait]
pub trait IPushGateway: Send + Sync {
    async fn request_permission(&self, user_id: &ID) -> PermissionStatus;
    async fn send_alert(&self, user_id: &ID, payload: &serde_json::Value) -> anyhow::Result<()>;
}

/// Push gateway reached over HTTP. When no gateway is registered every
/// permission request reports `Denied` and the alert channel stays
/// silent.
pub struct WebPushGateway {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebPushGateway {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PermissionResponse {
    status: String,
}

#[async_trait::async_trait]
impl IPushGateway for WebPushGateway {
    async fn request_permission(&self, user_id: &ID) -> PermissionStatus {
        let url = match &self.url {
            Some(url) => url,
            None => return PermissionStatus::Denied,
        };

        let res = self
            .client
            .post(format!("{}/permissions/{}", url, user_id))
            .send()
            .await;
        let res = match res {
            Ok(res) => res.json::<PermissionResponse>().await,
            Err(e) => {
                warn!(
                    "Unable to request notification permission for user: {}. Error: {:?}",
                    user_id, e
                );
                return PermissionStatus::Denied;
            }
        };

        match res {
            Ok(permission) => match permission.status.as_str() {
                "granted" => PermissionStatus::Granted,
                "denied" => PermissionStatus::Denied,
                _ => PermissionStatus::Default,
            },
            Err(_) => PermissionStatus::Default,
        }
    }

    async fn send_alert(&self, user_id: &ID, payload: &serde_json::Value) -> anyhow::Result<()> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No push gateway is registered"))?;

        self.client
            .post(format!("{}/alerts/{}", url, user_id))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
