use crate::server::{
    data::column::ColumnRepository,
    model::column::{ColumnChanges, NewColumn},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
