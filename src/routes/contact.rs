use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::contact::requests::{ContactListParams, ContactRequest};
use crate::models::profiles::entities::Role;
use crate::services::ContactService;

static CONTACT_SERVICE: Lazy<ContactService> = Lazy::new(ContactService::new_lazy);

pub async fn submit(
    req: HttpRequest,
    inquiry: web::Json<ContactRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.submit(&req, inquiry.into_inner()).await
}

pub async fn list(
    req: HttpRequest,
    query: web::Query<ContactListParams>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.list(&req, query.into_inner()).await
}

pub fn configure_contact_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/contact")
            .service(
                web::resource("")
                    .wrap(middlewares::RateLimit::contact())
                    .route(web::post().to(submit)),
            )
            .service(
                web::resource("/inquiries")
                    .wrap(middlewares::RequireRole::new(&Role::Admin))
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(list)),
            ),
    );
}
