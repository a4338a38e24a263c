pub mod admin;
pub mod index;
pub mod overview;

use actix_web::{Scope, web};

pub fn api_services() -> Scope {
    web::scope("/api")
        .service(admin::services())
        .service(overview::overview)
}
