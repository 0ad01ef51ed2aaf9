use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        kanban::{CreateCardDto, KanbanCardDto, LikeCardQuery, MoveCardDto, UpdateCardDto},
    },
    server::{
        error::AppError,
        model::card::{CreateCardParams, MoveCardParams, UpdateCardParams},
        service::card::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Create a card in a column.
///
/// Defaults: empty description and category, `MEDIUM` priority, `TO_DO` status,
/// zero likes.
///
/// # Returns
/// - `201 Created` - The created card
/// - `400 Bad Request` - Missing column id or title, or the column has adding disabled
/// - `404 Not Found` - Column does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/kanban/card",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Successfully created card", body = ApiResponse<KanbanCardDto>),
        (status = 400, description = "Invalid card data or column locked", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_card(
    State(state): State<AppState>,
    payload: Result<Json<CreateCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let card = CardService::new(&state.db)
        .create(CreateCardParams {
            column_id: payload.column_id,
            title: payload.title,
            description: payload.description,
            category_title: payload.category_title,
            category_color: payload.category_color,
            priority: payload.priority,
            status: payload.status,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Card created successfully", card.into_dto())),
    ))
}

/// Update any of a card's fields.
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Blank title or negative likes
/// - `404 Not Found` - No card with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/kanban/card/{id}",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Successfully updated card", body = ApiResponse<KanbanCardDto>),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let card = CardService::new(&state.db)
        .update(UpdateCardParams {
            id: id.clone(),
            title: payload.title,
            description: payload.description,
            category_title: payload.category_title,
            category_color: payload.category_color,
            priority: payload.priority,
            status: payload.status,
            likes: payload.likes,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Card with ID {} updated", id),
            card.into_dto(),
        )),
    ))
}

/// Delete a card and its comments.
#[utoipa::path(
    delete,
    path = "/kanban/card/{id}",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted card", body = MessageDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CardService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Card with ID {} deleted", id),
        }),
    ))
}

/// Move a card to another column.
///
/// The target column's add-lock does not apply to moves. `newIndex` is accepted
/// but cards within a column are always ordered by title.
///
/// # Returns
/// - `200 OK` - The moved card
/// - `400 Bad Request` - Missing card id or target column id
/// - `404 Not Found` - Card or target column does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/kanban/card/move",
    tag = CARD_TAG,
    request_body = MoveCardDto,
    responses(
        (status = 200, description = "Successfully moved card", body = ApiResponse<KanbanCardDto>),
        (status = 400, description = "Invalid move data", body = ErrorDto),
        (status = 404, description = "Card or target column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_card(
    State(state): State<AppState>,
    payload: Result<Json<MoveCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let card = CardService::new(&state.db)
        .move_card(MoveCardParams {
            card_id: payload.card_id,
            target_column_id: payload.new_column_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Card moved successfully", card.into_dto())),
    ))
}

/// Like a card, or unlike it with `increment=false`.
///
/// Unliking never takes the count below zero.
///
/// # Returns
/// - `200 OK` - The card with its new like count
/// - `404 Not Found` - No card with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/kanban/card/{id}/like",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID"),
        LikeCardQuery
    ),
    responses(
        (status = 200, description = "Successfully updated likes", body = ApiResponse<KanbanCardDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<LikeCardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let increment = query.increment.unwrap_or(true);

    let card = CardService::new(&state.db).like(&id, increment).await?;

    let action = if increment { "liked" } else { "unliked" };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Card with ID {} {}", id, action),
            card.into_dto(),
        )),
    ))
}
