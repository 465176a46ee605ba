use actix_web::{web, App, HttpServer};
use quiz_backend::config::server::ServerConfig;
use quiz_backend::infra::state::build_state;
use quiz_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use quiz_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        db_kind = ?config.db_kind,
        session_ttl_secs = config.session.ttl.as_secs(),
        "starting quiz backend"
    );

    // Connects and runs pending migrations before any request is served
    let app_state = match build_state()
        .with_db(config.db_kind)
        .with_session_config(config.session)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
