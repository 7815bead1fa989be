use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::profiles::entities::Role;
use crate::models::search::requests::SearchParams;
use crate::services::SearchService;

static SEARCH_SERVICE: Lazy<SearchService> = Lazy::new(SearchService::new_lazy);

pub async fn search(
    request: HttpRequest,
    query: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    SEARCH_SERVICE.search(&request, query.into_inner()).await
}

pub fn configure_search_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/search")
            .wrap(middlewares::RequireRole::new_any(Role::all_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(search)),
    );
}
