use crate::server::{data::comment::CommentRepository, model::comment::NewComment};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_with_replies;
mod get_by_card_ids;
mod get_replies;
mod update_text;
