use std::sync::Arc;

use site_assistant::app::create_app;
use site_assistant::config;
use site_assistant::gemini_client::GeminiClient;
use site_assistant::service::AssistantService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing site assistant service...");

    let config = config::load_config().map_err(std::io::Error::other)?;
    if config.api_key.is_none() {
        log::warn!(
            "{} is not set, chat requests will fail until it is configured",
            config::API_KEY_VAR
        );
    }

    let http_client = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .read_timeout(config.read_timeout())
        .build()
        .map_err(std::io::Error::other)?;

    let gemini_client = Arc::new(GeminiClient::new(
        http_client,
        &config.api_url,
        &config.model,
    ));
    let bind_addr = (config.host.clone(), config.port);
    let config = Arc::new(config);
    let assistant_service = Arc::new(AssistantService::new(gemini_client, config));

    log::info!("Listening on {}:{}", bind_addr.0, bind_addr.1);
    actix_web::HttpServer::new(move || create_app(assistant_service.clone()))
        .bind(bind_addr)?
        .run()
        .await
}
