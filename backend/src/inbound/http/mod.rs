//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod contact;
pub mod error;
pub mod health;
pub mod menu;
pub mod orders;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use crate::domain::ApiResult;

/// Register every `/api` endpoint with the shared JSON body handling.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bullburger::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(validation::json_config())
            .service(menu::list_menu)
            .service(menu::list_menu_by_category)
            .service(orders::place_order)
            .service(orders::get_order)
            .service(orders::update_order_status)
            .service(orders::get_order_progress)
            .service(contact::submit_contact),
    );
}
