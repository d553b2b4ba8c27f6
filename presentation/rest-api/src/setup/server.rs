use poem::{
    Endpoint, EndpointExt, IntoResponse, Route, Server as PoemServer,
    error::MethodNotAllowedError, http::StatusCode, listener::TcpListener, middleware::Tracing,
    web::Json,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(container, config.server.public_url())
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Routes of the service, without transport middleware.
    pub fn build_app(container: DependencyContainer, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (
                container.help_api,
                container.health_api,
                container.product_api,
                container.shopping_list_api,
            ),
            "Shopping List API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_error(method_not_allowed)
    }
}

async fn method_not_allowed(_: MethodNotAllowedError) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "method not allowed" })),
    )
}
