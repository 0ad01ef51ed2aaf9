//! Two-level comment threads.
//!
//! Turns the flat comment rows of one card into top-level comments with their replies
//! attached, resolving each author's display name and avatar. Only one level of nesting
//! is presented: a reply whose parent is missing, is itself a reply, or sits on another
//! card is left out of the thread.

use std::collections::HashMap;

use crate::server::model::comment::{
    Comment, CommentAuthor, DisplayAuthor, ThreadComment, ThreadReply,
};

pub struct CommentThreadBuilder<'a> {
    avatar_base_url: &'a str,
}

impl<'a> CommentThreadBuilder<'a> {
    pub fn new(avatar_base_url: &'a str) -> Self {
        Self { avatar_base_url }
    }

    /// Resolves the display name and avatar for a comment's author.
    ///
    /// Falls back to the raw user id for both name and avatar hash when the user is
    /// unknown.
    pub fn author(
        &self,
        user_id: &str,
        authors: &HashMap<String, CommentAuthor>,
    ) -> DisplayAuthor {
        match authors.get(user_id) {
            Some(author) => DisplayAuthor {
                name: author.display_name(),
                avatar: avatar_url(self.avatar_base_url, &author.username),
            },
            None => DisplayAuthor {
                name: user_id.to_string(),
                avatar: avatar_url(self.avatar_base_url, user_id),
            },
        }
    }

    /// Builds the thread for one card's comments.
    ///
    /// Top-level comments and each comment's replies are ordered by creation time, ties
    /// broken by id, regardless of the input order.
    pub fn build(
        &self,
        comments: Vec<Comment>,
        authors: &HashMap<String, CommentAuthor>,
    ) -> Vec<ThreadComment> {
        let (roots, mut replies_by_parent) = partition(comments);

        let thread: Vec<ThreadComment> = roots
            .into_iter()
            .map(|root| {
                let replies = replies_by_parent
                    .remove(&root.id)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|reply| reply.card_id == root.card_id)
                    .map(|reply| ThreadReply {
                        author: self.author(&reply.user_id, authors),
                        id: reply.id,
                        text: reply.text,
                        date: reply.created_at,
                    })
                    .collect();

                ThreadComment {
                    author: self.author(&root.user_id, authors),
                    id: root.id,
                    text: root.text,
                    date: root.created_at,
                    replies,
                }
            })
            .collect();

        let dropped: usize = replies_by_parent.values().map(Vec::len).sum();
        if dropped > 0 {
            tracing::debug!(
                "Left {} replies without a top-level parent out of the thread",
                dropped
            );
        }

        thread
    }
}

/// Number of top-level comments, shown on the board list instead of the thread.
pub fn count_top_level(comments: &[Comment]) -> u64 {
    comments.iter().filter(|c| !c.is_reply()).count() as u64
}

/// Avatar URL for an identity: the configured base followed by the lowercase hex
/// MD5 of the trimmed, lowercased identity.
pub fn avatar_url(base_url: &str, identity: &str) -> String {
    let digest = md5::compute(identity.trim().to_lowercase().as_bytes());
    format!("{}{:x}", base_url, digest)
}

/// Splits comments into ordered top-level comments and replies grouped by parent id.
fn partition(mut comments: Vec<Comment>) -> (Vec<Comment>, HashMap<String, Vec<Comment>>) {
    comments.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut roots = Vec::new();
    let mut replies_by_parent: HashMap<String, Vec<Comment>> = HashMap::new();

    for comment in comments {
        match comment.reply_for_comment_id.clone() {
            Some(parent_id) => replies_by_parent.entry(parent_id).or_default().push(comment),
            None => roots.push(comment),
        }
    }

    (roots, replies_by_parent)
}
