use sanjeevni_api::Application;
use sanjeevni_infra::{setup_context, Config};
use sanjeevni_sdk::SanjeevniSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, SanjeevniSDK, String) {
    let mut ctx = setup_context();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = SanjeevniSDK::new(address.clone());
    (app, sdk, address)
}
