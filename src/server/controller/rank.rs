use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ApiResponseDto, rank::SetRankDto},
    server::{
        error::{request::RequestError, AppError},
        model::rank::RankChange,
        service::rank::RankService,
        state::AppState,
        util::parse::parse_set_rank,
    },
};

pub static RANK_TAG: &str = "rank";

/// POST /api/rank
///
/// Body is read raw and type-checked by `parse_set_rank` so that a missing body, a
/// non-object body and wrongly typed fields each get their own 400 message.
#[utoipa::path(
    post,
    path = "/api/rank",
    tag = RANK_TAG,
    request_body = SetRankDto,
    responses(
        (status = 200, description = "Rank updated successfully", body = ApiResponseDto),
        (status = 400, description = "Missing body, invalid input, or Roblox rejected the group or role", body = ApiResponseDto),
        (status = 401, description = "Roblox credential rejected", body = ApiResponseDto),
        (status = 403, description = "Ranking account lacks permission or user is not in the group", body = ApiResponseDto),
        (status = 404, description = "Group, user or role not found", body = ApiResponseDto),
        (status = 405, description = "Method other than POST", body = ApiResponseDto),
        (status = 429, description = "Roblox rate limit hit", body = ApiResponseDto),
        (status = 500, description = "Server configuration error or unclassified Roblox error", body = ApiResponseDto)
    ),
)]
pub async fn set_rank(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_set_rank(&body)?;

    let update = RankService::new(&state.config, &state.http_client)
        .set_rank(RankChange::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::success(
            "Rank updated successfully",
            update.response,
        )),
    ))
}

/// Any method other than POST on a rank route.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::RequestErr(RequestError::MethodNotAllowed(method))
}
