use crate::{
    model::kanban::{CardPriority, CardStatus},
    server::{
        data::card::CardRepository,
        model::{
            card::{CardChanges, NewCard},
            pagination::PageRequest,
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod adjust_likes;
mod count_by_column_ids;
mod create;
mod delete;
mod get_by_column_id;
mod set_column;
mod update;
