use chrono::NaiveDateTime;
use serde::Serialize;

use crate::swiss::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i64,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub created_at: NaiveDateTime,
}
