//! View models for the summoner summary and the match cards, built from
//! backend participants.

use crate::api::models::Participant;
use crate::history::MatchGroup;

pub const NO_RANKED_GAMES: &str = "No ranked games";
pub const LEFT_COLUMN_SIZE: usize = 5;

/// Tiers displayed without a division.
const APEX_TIERS: [&str; 2] = ["Master", "Challenger"];

/// Builds image URLs below a common asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    base: String,
}

impl Assets {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Assets {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn champion_icon(&self, champion: &str) -> String {
        format!("{}/champion/{}.png", self.base, champion)
    }

    pub fn item_icon(&self, item: i32) -> String {
        format!("{}/item/{}.png", self.base, item)
    }

    pub fn profile_icon(&self, icon: i32) -> String {
        format!("{}/profileicon/{}.png", self.base, icon)
    }

    pub fn rank_emblem(&self, tier: &str) -> String {
        format!("{}/ranked-emblem/{}.png", self.base, tier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemIcon {
    pub id: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerChip {
    pub summoner_name: String,
    pub champion_name: String,
    pub champion_icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub summoner_name: String,
    pub profile_icon: String,
    pub tier: String,
    /// `None` when the player has no ranked games.
    pub emblem: Option<String>,
    pub tier_rank: String,
    pub record: String,
}

impl SummaryView {
    pub fn is_ranked(&self) -> bool {
        self.emblem.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCardView {
    pub match_id: String,
    pub champion_name: String,
    pub champion_icon: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub win: bool,
    pub items: Vec<ItemIcon>,
    pub left: Vec<PlayerChip>,
    pub right: Vec<PlayerChip>,
}

impl MatchCardView {
    pub fn status_label(&self) -> &'static str {
        if self.win {
            "Victory"
        } else {
            "Defeat"
        }
    }

    pub fn kda(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerChip> {
        self.left.iter().chain(self.right.iter())
    }

    /// Champion icons shown on this card: the main champion first.
    pub fn champion_icons(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.champion_icon.as_str())
            .chain(self.players().map(|p| p.champion_icon.as_str()))
    }
}

/// One entry per non-empty item slot; id 0 marks an empty slot.
pub fn items_grid(participant: &Participant, assets: &Assets) -> Vec<ItemIcon> {
    participant
        .items()
        .into_iter()
        .filter(|&item| item != 0)
        .map(|id| ItemIcon {
            id,
            url: assets.item_icon(id),
        })
        .collect()
}

pub fn tier_display(tier: &str, rank: &str, league_points: i32) -> String {
    if APEX_TIERS.iter().any(|apex| apex.eq_ignore_ascii_case(tier)) {
        format!("{} ({} LP)", tier, league_points)
    } else {
        format!("{} {} ({} LP)", tier, rank, league_points)
    }
}

pub fn summary_view(main: &Participant, assets: &Assets) -> SummaryView {
    let ranked = !main.tier.is_empty();
    SummaryView {
        summoner_name: main.summoner_name.clone(),
        profile_icon: assets.profile_icon(main.profile_icon),
        tier: main.tier.clone(),
        emblem: ranked.then(|| assets.rank_emblem(&main.tier)),
        tier_rank: if ranked {
            tier_display(&main.tier, &main.rank, main.league_points)
        } else {
            NO_RANKED_GAMES.to_string()
        },
        record: format!("Wins: {} - Losses: {}", main.wins, main.losses),
    }
}

fn chip(participant: &Participant, assets: &Assets) -> PlayerChip {
    PlayerChip {
        summoner_name: participant.summoner_name.clone(),
        champion_name: participant.champion_name.clone(),
        champion_icon: assets.champion_icon(&participant.champion_name),
    }
}

/// Builds the card for a match, or `None` when the group has no main
/// participant.
pub fn match_card(group: &MatchGroup, assets: &Assets) -> Option<MatchCardView> {
    let main = group.main_participant()?;
    let others = group.others();
    let split = others.len().min(LEFT_COLUMN_SIZE);
    let (left, right) = others.split_at(split);

    Some(MatchCardView {
        match_id: group.match_id.clone(),
        champion_name: main.champion_name.clone(),
        champion_icon: assets.champion_icon(&main.champion_name),
        kills: main.kills,
        deaths: main.deaths,
        assists: main.assists,
        win: main.win,
        items: items_grid(main, assets),
        left: left.iter().map(|p| chip(p, assets)).collect(),
        right: right.iter().map(|p| chip(p, assets)).collect(),
    })
}

/// Distinct champion icons across the given cards, in first-seen order.
pub fn champion_icon_urls(cards: &[MatchCardView]) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for url in cards.iter().flat_map(MatchCardView::champion_icons) {
        if !urls.iter().any(|seen| seen == url) {
            urls.push(url.to_string());
        }
    }
    urls
}
