use crate::region::Region;
use serde::{Deserialize, Serialize};

// Body of POST /search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub url: String,
    pub region: Region,
    pub count: usize,
    pub start: usize,
}

// Successful /search response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<Participant>>,
}

// Non-2xx /search response
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One player's record in one match.
///
/// The account-wide fields (`profile_icon`, `tier`, `rank`, `league_points`,
/// `wins`, `losses`) are only filled in on the record flagged as the main
/// participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub match_id: String,
    pub summoner_name: String,
    pub champion_name: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub win: bool,
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub is_main_participant: bool,
    pub profile_icon: i32,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl Participant {
    pub fn items(&self) -> [i32; 6] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5,
        ]
    }
}
