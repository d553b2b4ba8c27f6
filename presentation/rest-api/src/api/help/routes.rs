use poem_openapi::{OpenApi, payload::PlainText};

use crate::api::tags::ApiTags;

const USAGE: &str = concat!(
    "Example usage of the available endpoints:\n",
    "  GET /products\n",
    "  GET /products?category=warzywa\n",
    "  GET /products/most-used\n",
    "  GET /products/{id}\n",
    "  GET /shopping-list\n",
    "  POST /shopping-list/add\n",
);

pub struct HelpApi;

#[OpenApi]
impl HelpApi {
    /// Usage help
    ///
    /// Plain-text list of the endpoints this service exposes.
    #[oai(path = "/", method = "get", tag = "ApiTags::Help")]
    async fn usage(&self) -> PlainText<String> {
        PlainText(USAGE.to_string())
    }
}
