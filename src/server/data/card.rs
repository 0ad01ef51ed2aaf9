use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::model::{
    card::{Card, CardChanges, NewCard},
    pagination::PageRequest,
};

pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new card with zero likes
    pub async fn create(&self, card: NewCard) -> Result<Card, DbErr> {
        let card = entity::kanban_card::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            kanban_column_id: ActiveValue::Set(card.column_id),
            title: ActiveValue::Set(card.title),
            description: ActiveValue::Set(card.description),
            category_title: ActiveValue::Set(card.category_title),
            category_color: ActiveValue::Set(card.category_color),
            priority: ActiveValue::Set(card.priority.as_str().to_string()),
            status: ActiveValue::Set(card.status.as_str().to_string()),
            likes: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Card::from_entity(card)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Card>, DbErr> {
        entity::prelude::KanbanCard::find_by_id(id)
            .one(self.db)
            .await?
            .map(Card::from_entity)
            .transpose()
    }

    /// Gets a page of cards in a column ordered by title, ties broken by id.
    ///
    /// The page applies per column; an unpaginated request returns every card.
    pub async fn get_by_column_id(
        &self,
        column_id: &str,
        page: &PageRequest,
    ) -> Result<Vec<Card>, DbErr> {
        let mut query = entity::prelude::KanbanCard::find()
            .filter(entity::kanban_card::Column::KanbanColumnId.eq(column_id))
            .order_by_asc(entity::kanban_card::Column::Title)
            .order_by_asc(entity::kanban_card::Column::Id);

        if let Some(limit) = page.limit {
            query = query.limit(limit).offset(page.offset());
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .map(Card::from_entity)
            .collect()
    }

    /// Counts every card held by the given columns
    pub async fn count_by_column_ids(&self, column_ids: &[String]) -> Result<u64, DbErr> {
        if column_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::KanbanCard::find()
            .filter(entity::kanban_card::Column::KanbanColumnId.is_in(column_ids.to_vec()))
            .count(self.db)
            .await
    }

    /// Applies the provided field changes, returning `None` if the card does not exist.
    pub async fn update(&self, id: &str, changes: CardChanges) -> Result<Option<Card>, DbErr> {
        let Some(card) = entity::prelude::KanbanCard::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Card::from_entity(card).map(Some);
        }

        let mut active_model: entity::kanban_card::ActiveModel = card.into();
        if let Some(title) = changes.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(category_title) = changes.category_title {
            active_model.category_title = ActiveValue::Set(category_title);
        }
        if let Some(category_color) = changes.category_color {
            active_model.category_color = ActiveValue::Set(category_color);
        }
        if let Some(priority) = changes.priority {
            active_model.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(likes) = changes.likes {
            active_model.likes = ActiveValue::Set(likes);
        }

        let card = active_model.update(self.db).await?;

        Card::from_entity(card).map(Some)
    }

    /// Reassigns a card to another column
    pub async fn set_column(&self, id: &str, column_id: String) -> Result<Option<Card>, DbErr> {
        let Some(card) = entity::prelude::KanbanCard::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::kanban_card::ActiveModel = card.into();
        active_model.kanban_column_id = ActiveValue::Set(column_id);

        let card = active_model.update(self.db).await?;

        Card::from_entity(card).map(Some)
    }

    /// Adds or removes one like in a single UPDATE statement.
    ///
    /// The increment happens in the database so concurrent likes are never lost.
    /// Removing a like never takes the count below zero.
    pub async fn adjust_likes(&self, id: &str, increment: bool) -> Result<Option<Card>, DbErr> {
        let likes = if increment {
            Expr::cust("likes + 1")
        } else {
            Expr::cust("CASE WHEN likes > 0 THEN likes - 1 ELSE 0 END")
        };

        let result = entity::prelude::KanbanCard::update_many()
            .col_expr(entity::kanban_card::Column::Likes, likes)
            .filter(entity::kanban_card::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes a card and its comments in one transaction.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let exists = entity::prelude::KanbanCard::find_by_id(id)
            .one(&txn)
            .await?
            .is_some();

        if exists {
            delete_cards_cascade(&txn, vec![id.to_string()]).await?;
        }

        txn.commit().await?;

        Ok(exists)
    }
}

/// Deletes the given cards and every comment on them.
pub(super) async fn delete_cards_cascade<C: ConnectionTrait>(
    conn: &C,
    card_ids: Vec<String>,
) -> Result<(), DbErr> {
    if card_ids.is_empty() {
        return Ok(());
    }

    // Replies first so no statement leaves a dangling parent reference
    entity::prelude::KanbanComment::delete_many()
        .filter(entity::kanban_comment::Column::KanbanCardId.is_in(card_ids.clone()))
        .filter(entity::kanban_comment::Column::ReplyForCommentId.is_not_null())
        .exec(conn)
        .await?;

    entity::prelude::KanbanComment::delete_many()
        .filter(entity::kanban_comment::Column::KanbanCardId.is_in(card_ids.clone()))
        .exec(conn)
        .await?;

    entity::prelude::KanbanCard::delete_many()
        .filter(entity::kanban_card::Column::Id.is_in(card_ids))
        .exec(conn)
        .await?;

    Ok(())
}
