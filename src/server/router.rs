//! Route table and OpenAPI document.
//!
//! Handlers are registered through `OpenApiRouter` so the generated document stays in
//! sync with the routes. Swagger UI serves the document at `/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, comanda},
    state::AppState,
};

/// Registers the bearer token scheme referenced by the protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Token issued by POST /auth/signin"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Comandas API",
        description = "Order tabs per customer, protected by bearer tokens."
    ),
    tags(
        (name = "auth", description = "Sign in"),
        (name = "comanda", description = "Comanda management")
    )
)]
pub struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::sign_in))
        .routes(routes!(comanda::get_comandas, comanda::create_comanda))
        .routes(routes!(
            comanda::get_comanda,
            comanda::append_comanda,
            comanda::delete_comanda
        ))
}

pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
