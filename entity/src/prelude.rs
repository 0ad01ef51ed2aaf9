pub use super::kanban_board::Entity as KanbanBoard;
pub use super::kanban_card::Entity as KanbanCard;
pub use super::kanban_column::Entity as KanbanColumn;
pub use super::kanban_comment::Entity as KanbanComment;
pub use super::user::Entity as User;
