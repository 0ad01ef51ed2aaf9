use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::card::delete_cards_cascade,
    model::column::{Column, ColumnChanges, NewColumn},
};

pub struct ColumnRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ColumnRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, column: NewColumn) -> Result<Column, DbErr> {
        let column = entity::kanban_column::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(column.name),
            board_id: ActiveValue::Set(column.board_id),
            disable_add: ActiveValue::Set(column.disable_add),
            order: ActiveValue::Set(column.order),
        }
        .insert(self.db)
        .await?;

        Ok(Column::from_entity(column))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Column>, DbErr> {
        let column = entity::prelude::KanbanColumn::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(column.map(Column::from_entity))
    }

    /// Gets all columns of a board by `order`, ties broken by id
    pub async fn get_by_board_id(&self, board_id: &str) -> Result<Vec<Column>, DbErr> {
        let columns = entity::prelude::KanbanColumn::find()
            .filter(entity::kanban_column::Column::BoardId.eq(board_id))
            .order_by_asc(entity::kanban_column::Column::Order)
            .order_by_asc(entity::kanban_column::Column::Id)
            .all(self.db)
            .await?;

        Ok(columns.into_iter().map(Column::from_entity).collect())
    }

    /// Applies the provided field changes, keeping stored values for the rest.
    ///
    /// Returns `None` if the column does not exist.
    pub async fn update(&self, id: &str, changes: ColumnChanges) -> Result<Option<Column>, DbErr> {
        let Some(column) = entity::prelude::KanbanColumn::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(Column::from_entity(column)));
        }

        let mut active_model: entity::kanban_column::ActiveModel = column.into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(disable_add) = changes.disable_add {
            active_model.disable_add = ActiveValue::Set(disable_add);
        }
        if let Some(order) = changes.order {
            active_model.order = ActiveValue::Set(order);
        }

        let column = active_model.update(self.db).await?;

        Ok(Some(Column::from_entity(column)))
    }

    /// Deletes a column with its cards and their comments in one transaction.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let exists = entity::prelude::KanbanColumn::find_by_id(id)
            .one(&txn)
            .await?
            .is_some();

        if exists {
            delete_columns_cascade(&txn, vec![id.to_string()]).await?;
        }

        txn.commit().await?;

        Ok(exists)
    }
}

/// Deletes the given columns along with every card in them and those cards' comments.
///
/// Takes any connection so callers can run it inside their own transaction.
pub(super) async fn delete_columns_cascade<C: ConnectionTrait>(
    conn: &C,
    column_ids: Vec<String>,
) -> Result<(), DbErr> {
    if column_ids.is_empty() {
        return Ok(());
    }

    let card_ids: Vec<String> = entity::prelude::KanbanCard::find()
        .select_only()
        .column(entity::kanban_card::Column::Id)
        .filter(entity::kanban_card::Column::KanbanColumnId.is_in(column_ids.clone()))
        .into_tuple()
        .all(conn)
        .await?;

    delete_cards_cascade(conn, card_ids).await?;

    entity::prelude::KanbanColumn::delete_many()
        .filter(entity::kanban_column::Column::Id.is_in(column_ids))
        .exec(conn)
        .await?;

    Ok(())
}
