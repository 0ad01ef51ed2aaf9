use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::column::delete_columns_cascade,
    model::{board::Board, pagination::PageRequest},
};

pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new board with a generated id
    pub async fn create(&self, name: String) -> Result<Board, DbErr> {
        let board = entity::kanban_board::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name),
        }
        .insert(self.db)
        .await?;

        Ok(Board::from_entity(board))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Board>, DbErr> {
        let board = entity::prelude::KanbanBoard::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(board.map(Board::from_entity))
    }

    /// Gets boards ordered by name, optionally filtered by a name substring.
    ///
    /// The search is trimmed and ignored when blank. It matches literally, with `%`,
    /// `_` and `!` escaped, and both sides are lowered by the database so the match
    /// does not depend on the backend's `LIKE` case rules. Returns the requested page
    /// together with the number of boards matching the filter; an unpaginated request
    /// returns every match.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<(Vec<Board>, u64), DbErr> {
        let mut query = entity::prelude::KanbanBoard::find()
            .order_by_asc(entity::kanban_board::Column::Name)
            .order_by_asc(entity::kanban_board::Column::Id);

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(Expr::cust_with_values(
                "LOWER(name) LIKE LOWER(?) ESCAPE '!'",
                [substring_pattern(search)],
            ));
        }

        let (boards, total) = match page.limit {
            Some(per_page) => {
                let paginator = query.paginate(self.db, per_page);
                let total = paginator.num_items().await?;
                let boards = paginator.fetch_page(page.page - 1).await?;

                (boards, total)
            }
            None => {
                let boards = query.all(self.db).await?;
                let total = boards.len() as u64;

                (boards, total)
            }
        };

        Ok((boards.into_iter().map(Board::from_entity).collect(), total))
    }

    /// Renames a board, returning `None` if it does not exist
    pub async fn rename(&self, id: &str, name: String) -> Result<Option<Board>, DbErr> {
        let Some(board) = entity::prelude::KanbanBoard::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::kanban_board::ActiveModel = board.into();
        active_model.name = ActiveValue::Set(name);

        let board = active_model.update(self.db).await?;

        Ok(Some(Board::from_entity(board)))
    }

    /// Deletes a board together with its columns, their cards, and those cards' comments.
    ///
    /// Runs in a single transaction so a failure leaves the aggregate untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Board existed and was deleted
    /// - `Ok(false)` - No board with this id
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let column_ids: Vec<String> = entity::prelude::KanbanColumn::find()
            .select_only()
            .column(entity::kanban_column::Column::Id)
            .filter(entity::kanban_column::Column::BoardId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        delete_columns_cascade(&txn, column_ids).await?;

        let result = entity::prelude::KanbanBoard::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

/// Escape character declared in the search filter's `ESCAPE` clause.
const LIKE_ESCAPE: char = '!';

/// Wraps `search` in `%` wildcards, escaping the characters `LIKE` treats specially.
fn substring_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
