use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{api::ApiResponseDto, rank::SetRankDto},
    server::{
        controller::rank::{self, method_not_allowed, set_rank},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rank Relay",
        description = "Changes Roblox group ranks on behalf of game servers"
    ),
    paths(rank::set_rank),
    components(schemas(SetRankDto, ApiResponseDto))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/rank",
            post(set_rank).fallback(method_not_allowed),
        )
        // Path used by existing game scripts
        .route("/setRank", post(set_rank).fallback(method_not_allowed))
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
