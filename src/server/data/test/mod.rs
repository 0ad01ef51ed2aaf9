mod board;
mod card;
mod column;
mod comment;
