//! Menu catalogue read endpoints.
//!
//! ```text
//! GET /api/menu
//! GET /api/menu/{category}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ApiResult, MenuItem};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Menu item as served to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Bull Signature Burger")]
    pub name: String,
    pub description: String,
    /// Price in minor currency units.
    #[schema(example = 89900)]
    pub price: i64,
    /// Price formatted for display.
    #[schema(example = "Rs. 899")]
    pub price_display: String,
    #[schema(example = "Burgers")]
    pub category: String,
    /// Image URL.
    pub image: String,
    pub available: bool,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_owned(),
            description: item.description().to_owned(),
            price: item.price().minor_units(),
            price_display: item.price().display(),
            category: item.category().to_owned(),
            image: item.image().to_owned(),
            available: item.is_available(),
        }
    }
}

fn to_response(items: &[MenuItem]) -> Vec<MenuItemResponse> {
    items.iter().map(MenuItemResponse::from).collect()
}

/// List the full menu in catalogue order.
#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Menu items", body = [MenuItemResponse]),
        (status = 503, description = "Menu store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "listMenu"
)]
#[get("/menu")]
pub async fn list_menu(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let items = state.menu.list_menu().await?;
    Ok(HttpResponse::Ok().json(to_response(&items)))
}

/// List the menu items in one category. Matching is exact and
/// case-sensitive; an unknown category yields an empty list.
#[utoipa::path(
    get,
    path = "/api/menu/{category}",
    params(("category" = String, Path, description = "Category label", example = "Burgers")),
    responses(
        (status = 200, description = "Menu items in the category", body = [MenuItemResponse]),
        (status = 503, description = "Menu store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "listMenuByCategory"
)]
#[get("/menu/{category}")]
pub async fn list_menu_by_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let category = path.into_inner();
    let items = state.menu.list_menu_by_category(&category).await?;
    Ok(HttpResponse::Ok().json(to_response(&items)))
}
