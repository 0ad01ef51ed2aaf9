use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        kanban::{CreateColumnDto, KanbanColumnDto, UpdateColumnDto},
    },
    server::{
        error::AppError,
        model::column::{CreateColumnParams, UpdateColumnParams},
        service::column::ColumnService,
        state::AppState,
    },
};

/// Tag for grouping column endpoints in OpenAPI documentation
pub static COLUMN_TAG: &str = "column";

/// Add a column to a board.
///
/// `disableAdd` defaults to `false` and `order` to `0`.
///
/// # Returns
/// - `201 Created` - The created column
/// - `400 Bad Request` - Missing board id or name
/// - `404 Not Found` - Board does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/kanban/column",
    tag = COLUMN_TAG,
    request_body = CreateColumnDto,
    responses(
        (status = 201, description = "Successfully added column", body = ApiResponse<KanbanColumnDto>),
        (status = 400, description = "Invalid column data", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_column(
    State(state): State<AppState>,
    payload: Result<Json<CreateColumnDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let column = ColumnService::new(&state.db)
        .create(CreateColumnParams {
            board_id: payload.board_id,
            name: payload.name,
            disable_add: payload.disable_add,
            order: payload.order,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Column added successfully",
            column.into_dto(),
        )),
    ))
}

/// Update a column's name, add-lock, or order.
///
/// # Returns
/// - `200 OK` - The updated column
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - No column with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/kanban/column/{id}",
    tag = COLUMN_TAG,
    params(
        ("id" = String, Path, description = "Column ID")
    ),
    request_body = UpdateColumnDto,
    responses(
        (status = 200, description = "Successfully updated column", body = ApiResponse<KanbanColumnDto>),
        (status = 400, description = "Invalid column data", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateColumnDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let column = ColumnService::new(&state.db)
        .update(UpdateColumnParams {
            id: id.clone(),
            name: payload.name,
            disable_add: payload.disable_add,
            order: payload.order,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Column with ID {} updated", id),
            column.into_dto(),
        )),
    ))
}

/// Delete a column with its cards and their comments.
#[utoipa::path(
    delete,
    path = "/kanban/column/{id}",
    tag = COLUMN_TAG,
    params(
        ("id" = String, Path, description = "Column ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted column", body = MessageDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ColumnService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Column with ID {} deleted", id),
        }),
    ))
}
