use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        kanban::{
            CreateCommentDto, CreateReplyDto, KanbanCommentDto, ReplyDetailDto, UpdateCommentDto,
        },
    },
    server::{
        error::AppError,
        model::comment::{
            CreateCommentParams, CreateReplyParams, ReplyDetail, UpdateCommentParams,
        },
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Add a comment to a card.
///
/// A request carrying `replyForCommentId` is stored as a reply to that comment.
///
/// # Returns
/// - `201 Created` - The stored comment
/// - `400 Bad Request` - Missing card id, text, or user id
/// - `404 Not Found` - Card or parent comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/kanban/comment",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = ApiResponse<KanbanCommentDto>),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 404, description = "Card or parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let comment = CommentService::new(&state.db, &state.avatar_base_url)
        .add_comment(CreateCommentParams {
            card_id: payload.card_id,
            text: payload.text,
            user_id: payload.user_id,
            reply_for_comment_id: payload.reply_for_comment_id,
        })
        .await?;

    let message = if comment.is_reply() {
        "Reply created successfully"
    } else {
        "Comment created successfully"
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(message, comment.into_dto())),
    ))
}

/// Replace a comment's text.
#[utoipa::path(
    put,
    path = "/kanban/comment/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = ApiResponse<KanbanCommentDto>),
        (status = 400, description = "Missing text", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let comment = CommentService::new(&state.db, &state.avatar_base_url)
        .update(UpdateCommentParams {
            id: id.clone(),
            text: payload.text,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Comment with ID {} updated", id),
            comment.into_dto(),
        )),
    ))
}

/// Delete a comment together with its replies.
#[utoipa::path(
    delete,
    path = "/kanban/comment/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted comment", body = MessageDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db, &state.avatar_base_url)
        .delete(&id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Comment with ID {} deleted", id),
        }),
    ))
}

/// Reply to a top-level comment.
///
/// # Returns
/// - `201 Created` - The stored reply
/// - `400 Bad Request` - Missing fields, or the card differs from the parent's card
/// - `404 Not Found` - Parent comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/kanban/reply",
    tag = COMMENT_TAG,
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Successfully created reply", body = ApiResponse<KanbanCommentDto>),
        (status = 400, description = "Invalid reply data", body = ErrorDto),
        (status = 404, description = "Parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_reply(
    State(state): State<AppState>,
    payload: Result<Json<CreateReplyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let reply = CommentService::new(&state.db, &state.avatar_base_url)
        .add_reply(CreateReplyParams {
            card_id: payload.kanban_card_id,
            reply_for_comment_id: payload.reply_for_comment_id,
            text: payload.text,
            user_id: payload.user_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Reply created successfully",
            reply.into_dto(),
        )),
    ))
}

/// List the replies of a comment, oldest first, with display authors.
#[utoipa::path(
    get,
    path = "/kanban/comment/{id}/replies",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Parent comment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved replies", body = ApiResponse<Vec<ReplyDetailDto>>),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_replies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let replies = CommentService::new(&state.db, &state.avatar_base_url)
        .get_replies(&id)
        .await?;

    let count = replies.len() as u64;
    let data: Vec<ReplyDetailDto> = replies.into_iter().map(ReplyDetail::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(format!("Retrieved {} replies", count), data).count(count)),
    ))
}
