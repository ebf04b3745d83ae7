//! The condition vocabulary for `IF` and `WHILE` statements.
//!
//! Conditions form a closed set of primitive tests. The statement tree
//! stores them as opaque units; only the parser and the token mapping here
//! look at which value one is.

/// A primitive test guarding an `IF` or `WHILE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsEnemy,
    NextIsNotEnemy,
    NextIsFriend,
    NextIsNotFriend,
    NextIsWall,
    NextIsNotWall,
    Random,
    True,
}

impl Condition {
    /// Maps a source token to its condition, or `None` if the token does
    /// not name one.
    pub fn from_token(token: &str) -> Option<Condition> {
        Some(match token {
            "next-is-empty" => Condition::NextIsEmpty,
            "next-is-not-empty" => Condition::NextIsNotEmpty,
            "next-is-enemy" => Condition::NextIsEnemy,
            "next-is-not-enemy" => Condition::NextIsNotEnemy,
            "next-is-friend" => Condition::NextIsFriend,
            "next-is-not-friend" => Condition::NextIsNotFriend,
            "next-is-wall" => Condition::NextIsWall,
            "next-is-not-wall" => Condition::NextIsNotWall,
            "random" => Condition::Random,
            "true" => Condition::True,
            _ => return None,
        })
    }

    /// The source token that spells this condition.
    pub fn token(self) -> &'static str {
        match self {
            Condition::NextIsEmpty => "next-is-empty",
            Condition::NextIsNotEmpty => "next-is-not-empty",
            Condition::NextIsEnemy => "next-is-enemy",
            Condition::NextIsNotEnemy => "next-is-not-enemy",
            Condition::NextIsFriend => "next-is-friend",
            Condition::NextIsNotFriend => "next-is-not-friend",
            Condition::NextIsWall => "next-is-wall",
            Condition::NextIsNotWall => "next-is-not-wall",
            Condition::Random => "random",
            Condition::True => "true",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
