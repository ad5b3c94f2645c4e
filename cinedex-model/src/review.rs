use serde::{Deserialize, Serialize};

/// Editorial review. Uniqueness is full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub link: String,
    pub review: String,
}

impl Review {
    pub fn new(
        review: impl Into<String>,
        author: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            link: link.into(),
            review: review.into(),
        }
    }

    /// Short display title: the text up to and including the first sentence
    /// terminator, or the first 30 characters when there is none.
    pub fn title(&self) -> String {
        match self.review.find(['.', '!', '?']) {
            Some(position) => self.review[..=position].to_string(),
            None => self.review.chars().take(30).collect(),
        }
    }
}
