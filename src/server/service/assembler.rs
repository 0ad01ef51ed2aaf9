//! Hydration of columns and cards into read views.
//!
//! Both assemblers batch their lookups: comments for every card of a column come from a
//! single query, and so do the users authoring them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        card::CardRepository, column::ColumnRepository, comment::CommentRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        card::{AssembledCard, CardComments, CommentDetail},
        column::AssembledColumn,
        pagination::PageRequest,
    },
    service::thread::{count_top_level, CommentThreadBuilder},
};

/// Loads the cards of a column with their comment sections.
pub struct CardAssembler<'a> {
    db: &'a DatabaseConnection,
    threads: CommentThreadBuilder<'a>,
}

impl<'a> CardAssembler<'a> {
    pub fn new(db: &'a DatabaseConnection, avatar_base_url: &'a str) -> Self {
        Self {
            db,
            threads: CommentThreadBuilder::new(avatar_base_url),
        }
    }

    /// Assembles one page of a column's cards.
    ///
    /// A column that does not exist simply has no cards.
    pub async fn assemble(
        &self,
        column_id: &str,
        detail: CommentDetail,
        page: &PageRequest,
    ) -> Result<Vec<AssembledCard>, AppError> {
        let cards = CardRepository::new(self.db)
            .get_by_column_id(column_id, page)
            .await?;

        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let card_ids: Vec<String> = cards.iter().map(|c| c.id.clone()).collect();
        let mut comments_by_card = CommentRepository::new(self.db)
            .get_by_card_ids(&card_ids)
            .await?;

        let authors = match detail {
            CommentDetail::Count => Default::default(),
            CommentDetail::Thread => {
                let user_ids = comments_by_card
                    .values()
                    .flatten()
                    .map(|c| c.user_id.clone());

                UserRepository::new(self.db).get_authors(user_ids).await?
            }
        };

        Ok(cards
            .into_iter()
            .map(|card| {
                let comments = comments_by_card.remove(&card.id).unwrap_or_default();
                let comments = match detail {
                    CommentDetail::Count => CardComments::Count(count_top_level(&comments)),
                    CommentDetail::Thread => {
                        CardComments::Thread(self.threads.build(comments, &authors))
                    }
                };

                AssembledCard { card, comments }
            })
            .collect())
    }
}

/// Loads the columns of a board, each with its assembled cards.
pub struct ColumnAssembler<'a> {
    db: &'a DatabaseConnection,
    cards: CardAssembler<'a>,
}

impl<'a> ColumnAssembler<'a> {
    pub fn new(db: &'a DatabaseConnection, avatar_base_url: &'a str) -> Self {
        Self {
            db,
            cards: CardAssembler::new(db, avatar_base_url),
        }
    }

    /// Assembles every column of a board in display order.
    ///
    /// The page request applies to each column's cards independently.
    ///
    /// # Returns
    /// - `Ok((columns, total_cards))` - Columns plus the number of cards across all of
    ///   them, ignoring pagination
    pub async fn assemble(
        &self,
        board_id: &str,
        detail: CommentDetail,
        page: &PageRequest,
    ) -> Result<(Vec<AssembledColumn>, u64), AppError> {
        let card_repo = CardRepository::new(self.db);

        let columns = ColumnRepository::new(self.db)
            .get_by_board_id(board_id)
            .await?;

        let column_ids: Vec<String> = columns.iter().map(|c| c.id.clone()).collect();
        let total_cards = card_repo.count_by_column_ids(&column_ids).await?;

        let mut assembled = Vec::with_capacity(columns.len());
        for column in columns {
            let cards = self.cards.assemble(&column.id, detail, page).await?;
            assembled.push(AssembledColumn { column, cards });
        }

        Ok((assembled, total_cards))
    }
}
