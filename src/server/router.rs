use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{
            board::{self, BOARD_TAG},
            card::{self, CARD_TAG},
            column::{self, COLUMN_TAG},
            comment::{self, COMMENT_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kanban Board API",
        description = "Boards, columns, cards and threaded card comments"
    ),
    tags(
        (name = BOARD_TAG, description = "Board listing, aggregation and management"),
        (name = COLUMN_TAG, description = "Column management"),
        (name = CARD_TAG, description = "Card management, moves and likes"),
        (name = COMMENT_TAG, description = "Card comments and replies")
    )
)]
struct ApiDoc;

/// Builds the API router with every kanban route, the OpenAPI document served under
/// `/api-docs/openapi.json`, Swagger UI under `/swagger-ui`, and a JSON 404 fallback.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(board::get_all_boards, board::create_board))
        .routes(routes!(board::get_board_list))
        .routes(routes!(board::get_board_by_id))
        .routes(routes!(
            board::get_kanban_board_by_id,
            board::update_board,
            board::delete_board
        ))
        .routes(routes!(column::add_column))
        .routes(routes!(column::update_column, column::delete_column))
        .routes(routes!(card::add_card))
        .routes(routes!(card::move_card))
        .routes(routes!(card::update_card, card::delete_card))
        .routes(routes!(card::like_card))
        .routes(routes!(comment::add_comment))
        .routes(routes!(comment::update_comment, comment::delete_comment))
        .routes(routes!(comment::add_reply))
        .routes(routes!(comment::get_replies))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            message: "Request not found!".to_string(),
            error: None,
        }),
    )
}
