use std::sync::Arc;

use bex_api::BatchApiClient;
use bex_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), bex_core::Error> {
    bex_core::logging::init("bex");

    let cfg = Arc::new(Config::load()?);
    let api = Arc::new(BatchApiClient::new(
        cfg.api_base_url.clone(),
        cfg.request_timeout,
    ));

    bex_telegram::router::run_polling(cfg, api)
        .await
        .map_err(|e| bex_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
