use crate::server::{data::board::BoardRepository, model::pagination::PageRequest};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod rename;
