mod telemetry;

use sanjeevni_api::Application;
use sanjeevni_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("sanjeevni_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    app.start().await
}
