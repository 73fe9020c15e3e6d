//! Entry point for the `lingo-gateway` HTTP server.

use std::sync::Arc;

use lingo_gateway::{routes::create_router, settings::Settings, state::AppState};
use lingo_translate::{GoogleTranslate, Translator, TranslatorConfig};
use tracing::info;

#[tokio::main]
async fn main() {
    // Values from a .env file complement the process environment; absence is fine.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let translator = match GoogleTranslate::new(TranslatorConfig::default()) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            tracing::error!(error = %e, "failed to build translation client");
            std::process::exit(1);
        }
    };
    info!(provider = translator.name(), "translation backend ready");

    let addr = settings.listen_addr;
    let languages = settings.catalog.len();
    let app = create_router(AppState::new(settings, translator));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, languages, "lingo-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
