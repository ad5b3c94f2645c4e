use serde::{Deserialize, Serialize};

/// Actor credit. Uniqueness is full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub actor: String,
    pub character: String,
}

impl Cast {
    pub fn new(actor: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            character: character.into(),
        }
    }
}

/// Production credit. Uniqueness is full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    pub department: String,
    pub job: String,
    pub name: String,
}

impl Crew {
    pub fn new(
        name: impl Into<String>,
        job: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            department: department.into(),
            job: job.into(),
            name: name.into(),
        }
    }
}
