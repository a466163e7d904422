use sanjeevni_domain::ID;

/// Webhook notified when a due reminder has the caregiver flag set.
pub struct CaregiverWebhook {
    client: reqwest::Client,
    url: Option<String>,
}

impl CaregiverWebhook {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub async fn notify(&self, user_id: &ID, payload: &serde_json::Value) -> anyhow::Result<()> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No caregiver webhook is configured"))?;

        self.client
            .post(url)
            .header("sanjeevni-user-id", user_id.as_string())
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
