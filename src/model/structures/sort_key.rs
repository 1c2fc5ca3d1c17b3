use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// Header column a standings table can be ordered by.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum SortKey {
    ByName = 0,
    ByRating = 1,
    ByScore = 2
}

impl TryFrom<i32> for SortKey {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(SortKey::ByName),
            1 => Ok(SortKey::ByRating),
            2 => Ok(SortKey::ByScore),
            _ => Err(())
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ();

    fn try_from(v: &str) -> Result<Self, Self::Error> {
        match v {
            "name" => Ok(SortKey::ByName),
            "rating" => Ok(SortKey::ByRating),
            "score" => Ok(SortKey::ByScore),
            _ => Err(())
        }
    }
}
