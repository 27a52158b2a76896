use crate::renderer::LoadingIndicator;
use crate::view::{Document, MatchCardView, PlayerChip, SummaryView};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    result: String,
    kda: String,
    items: String,
    left: String,
    right: String,
}

/// `indicatif` spinner shown while a page is being fetched.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        Spinner { bar }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator for Spinner {
    fn start(&self, message: &str) {
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn stop(&self) {
        self.bar.disable_steady_tick();
        self.bar.finish_and_clear();
        self.bar.reset();
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_summary(summary: &SummaryView) {
    println!("\n{}", format!("🎮 {}", summary.summoner_name).bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    if summary.is_ranked() {
        println!("{} {}", "Rank:".bold(), summary.tier_rank.yellow());
    } else {
        println!("{}", summary.tier_rank.dimmed());
    }
    println!("{}\n", summary.record);
}

fn names(players: &[PlayerChip]) -> String {
    players
        .iter()
        .map(|p| format!("{} ({})", p.summoner_name, p.champion_name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn match_rows<'a>(cards: impl Iterator<Item = &'a MatchCardView>) -> Vec<MatchRow> {
    cards
        .enumerate()
        .map(|(idx, card)| {
            let result = if card.win {
                card.status_label().green().to_string()
            } else {
                card.status_label().red().to_string()
            };
            MatchRow {
                number: format!("{}", idx + 1),
                champion: card.champion_name.clone(),
                result,
                kda: card.kda(),
                items: card
                    .items
                    .iter()
                    .map(|item| item.id.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                left: names(&card.left),
                right: names(&card.right),
            }
        })
        .collect()
}

pub fn display_match_history<'a>(cards: impl Iterator<Item = &'a MatchCardView>) {
    let rows = match_rows(cards);
    if rows.is_empty() {
        println!("{}", "No matches to show".yellow());
        return;
    }

    println!("{}", format!("📊 MATCH HISTORY ({} games)", rows.len()).bold().cyan());
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

/// Prints the whole document: error, summary and match table.
pub fn display_document(document: &Document) {
    if let Some(message) = document.error() {
        display_error(message);
    }
    if let Some(summary) = document.summary() {
        display_summary(summary);
    }
    if document.match_cards().next().is_some() {
        display_match_history(document.match_cards());
    }
}

/// Numbered list of the players that can be followed from the current page.
pub fn display_players(document: &Document) {
    let players: Vec<&PlayerChip> = document
        .match_cards()
        .flat_map(MatchCardView::players)
        .collect();
    if players.is_empty() {
        return;
    }
    println!("{}", "Players".bold().yellow());
    for (idx, player) in players.iter().enumerate() {
        println!("  {:>2}. {} ({})", idx + 1, player.summoner_name, player.champion_name);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::cards::ItemIcon;

    fn chip(name: &str, champion: &str) -> PlayerChip {
        PlayerChip {
            summoner_name: name.to_string(),
            champion_name: champion.to_string(),
            champion_icon: format!("img/champion/{}.png", champion),
        }
    }

    #[test]
    fn rows_follow_card_order() {
        let card = MatchCardView {
            match_id: "EUW1_1".to_string(),
            champion_name: "Ahri".to_string(),
            champion_icon: "img/champion/Ahri.png".to_string(),
            kills: 3,
            deaths: 4,
            assists: 5,
            win: true,
            items: vec![
                ItemIcon { id: 3020, url: String::new() },
                ItemIcon { id: 6655, url: String::new() },
            ],
            left: vec![chip("a", "Lux"), chip("b", "Zed")],
            right: vec![chip("c", "Jinx")],
        };
        let rows = match_rows([card].iter());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, "1");
        assert!(rows[0].result.contains("Victory"));
        assert_eq!(rows[0].kda, "3/4/5");
        assert_eq!(rows[0].items, "3020 6655");
        assert_eq!(rows[0].left, "a (Lux), b (Zed)");
        assert_eq!(rows[0].right, "c (Jinx)");
    }
}
