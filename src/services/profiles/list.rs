use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::models::{
    ApiResponse, ErrorCode,
    profiles::requests::{ProfileListParams, ProfileListQuery},
};

pub async fn list_profiles(
    service: &ProfileService,
    query: ProfileListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = ProfileListQuery {
        page,
        size,
        role: query.role,
        status: query.status,
        search: query.search,
    };

    match storage.list_profiles_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Profile list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve profile list: {e}"),
            )),
        ),
    }
}
