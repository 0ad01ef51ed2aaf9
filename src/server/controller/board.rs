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
        kanban::{
            BoardDto, BoardListQuery, BoardSummaryDto, CreateBoardDto, PageQuery, UpdateBoardDto,
        },
    },
    server::{
        error::AppError,
        model::{
            board::{AssembledBoard, Board, CreateBoardParams, UpdateBoardParams},
            pagination::{PageRequest, Pagination},
        },
        service::{aggregate::BoardAggregateService, board::BoardService},
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Get all boards with their columns and cards.
///
/// Paginates over boards; every card of a returned board is included with the
/// number of its top-level comments.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `page`, `limit`, and `search` name filter
///
/// # Returns
/// - `200 OK` - Boards with `count`, `totalCount`, and optional `pagination`
/// - `400 Bad Request` - Malformed or out-of-range query parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/kanban",
    tag = BOARD_TAG,
    params(BoardListQuery),
    responses(
        (status = 200, description = "Successfully retrieved boards", body = ApiResponse<Vec<BoardDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_boards(
    State(state): State<AppState>,
    query: Result<Query<BoardListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let page = PageRequest::new(query.page, query.limit)?;

    let boards = BoardAggregateService::new(&state.db, &state.avatar_base_url)
        .get_all_boards(query.search.as_deref(), page)
        .await?;

    let count = boards.items.len() as u64;
    let data: Vec<BoardDto> = boards
        .items
        .into_iter()
        .map(AssembledBoard::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(format!("Retrieved {} kanban boards", count), data)
                .count(count)
                .total_count(boards.total)
                .pagination(boards.pagination.map(Pagination::into_dto)),
        ),
    ))
}

/// Get a page of boards without their contents.
///
/// # Returns
/// - `200 OK` - `{id, name}` per board with `count`, `totalCount`, and optional `pagination`
/// - `400 Bad Request` - Malformed or out-of-range query parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/kanban/list",
    tag = BOARD_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Successfully retrieved board list", body = ApiResponse<Vec<BoardSummaryDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board_list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let page = PageRequest::new(query.page, query.limit)?;

    let boards = BoardService::new(&state.db).get_board_list(page).await?;

    let count = boards.items.len() as u64;
    let data: Vec<BoardSummaryDto> = boards.items.into_iter().map(Board::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(format!("Retrieved {} boards", count), data)
                .count(count)
                .total_count(boards.total)
                .pagination(boards.pagination.map(Pagination::into_dto)),
        ),
    ))
}

/// Get a board's id and name.
///
/// # Returns
/// - `200 OK` - The board
/// - `404 Not Found` - No board with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/kanban/board/{id}",
    tag = BOARD_TAG,
    params(
        ("id" = String, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved board", body = ApiResponse<BoardSummaryDto>),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let board = BoardService::new(&state.db).get_board_by_id(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Retrieved board with ID {}", id),
            board.into_dto(),
        )),
    ))
}

/// Get a fully assembled board with comment threads.
///
/// `page` and `limit` apply to the cards of each column independently; pagination
/// metadata is computed against the number of cards on the whole board.
///
/// # Returns
/// - `200 OK` - The board with `totalCount` cards and optional `pagination`
/// - `400 Bad Request` - Malformed or out-of-range query parameters
/// - `404 Not Found` - No board with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/kanban/{id}",
    tag = BOARD_TAG,
    params(
        ("id" = String, Path, description = "Board ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved kanban board", body = ApiResponse<BoardDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 404, description = "Kanban board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_kanban_board_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let page = PageRequest::new(query.page, query.limit)?;

    let detail = BoardAggregateService::new(&state.db, &state.avatar_base_url)
        .get_kanban_board_by_id(&id, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(
                format!("Get kanban board with ID {}", id),
                detail.board.into_dto(),
            )
            .total_count(detail.total_cards)
            .pagination(detail.pagination.map(Pagination::into_dto)),
        ),
    ))
}

/// Create a new board.
///
/// # Returns
/// - `201 Created` - The created board
/// - `400 Bad Request` - Missing or blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/kanban",
    tag = BOARD_TAG,
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Successfully created board", body = ApiResponse<BoardSummaryDto>),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    payload: Result<Json<CreateBoardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let board = BoardService::new(&state.db)
        .create(CreateBoardParams { name: payload.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Board created successfully",
            board.into_dto(),
        )),
    ))
}

/// Rename a board.
///
/// # Returns
/// - `200 OK` - The updated board
/// - `400 Bad Request` - Missing or blank name
/// - `404 Not Found` - No board with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/kanban/{id}",
    tag = BOARD_TAG,
    params(
        ("id" = String, Path, description = "Board ID")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Successfully updated board", body = ApiResponse<BoardSummaryDto>),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBoardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let board = BoardService::new(&state.db)
        .update(UpdateBoardParams {
            id: id.clone(),
            name: payload.name,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Board with ID {} updated", id),
            board.into_dto(),
        )),
    ))
}

/// Delete a board with all its columns, cards, and comments.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No board with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/kanban/{id}",
    tag = BOARD_TAG,
    params(
        ("id" = String, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted board", body = MessageDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    BoardService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Board with ID {} deleted", id),
        }),
    ))
}
