//! Server construction and route wiring.

mod config;
mod migrations;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use catalog::ApiDoc;
use catalog::doc::api_docs;
use catalog::inbound::http::health::{HealthState, healtz};
use catalog::inbound::http::{HttpState, error, items};
use catalog::outbound::persistence::{DbPool, DieselCatalogRepository, PoolConfig};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(items::list_items)
        .service(items::get_item)
        .service(items::create_item)
        .service(items::update_item)
        .service(items::delete_item);

    let mut app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(error::json_config())
        .app_data(error::query_config())
        .app_data(error::path_config())
        .service(api)
        .service(healtz)
        .service(api_docs);

    #[cfg(debug_assertions)]
    {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Run migrations, build the pool, and serve until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    migrations::run_pending(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(
        PoolConfig::new(config.database_url.as_str()).with_max_size(config.pool_max_size),
    )
    .await
    .map_err(std::io::Error::other)?;

    let repository = DieselCatalogRepository::new(pool);
    let http_state = web::Data::new(HttpState::new(Arc::new(repository)));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind((config.host.as_str(), config.port))?;

    info!(host = %config.host, port = config.port, "catalog service listening");
    health_state.mark_ready();
    server.run().await
}
