use std::sync::Arc;

use bcb_core::{
    barcode::{BarcodeRenderer, Code128Renderer},
    config::Config,
};

#[tokio::main]
async fn main() -> Result<(), bcb_core::Error> {
    bcb_core::logging::init("bcb")?;

    let cfg = Arc::new(Config::load()?);
    let renderer: Arc<dyn BarcodeRenderer> = Arc::new(Code128Renderer::default());

    bcb_telegram::router::run_polling(cfg, renderer)
        .await
        .map_err(|e| bcb_core::Error::External(format!("telegram bot failed: {e:#}")))?;

    Ok(())
}
