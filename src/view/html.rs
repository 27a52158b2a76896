//! Maps the view models onto the render tree.

use super::cards::{MatchCardView, PlayerChip, SummaryView};
use super::document::{Block, Document};
use super::node::{div, img, Action, Element, Node};

pub fn summary_node(summary: &SummaryView) -> Node {
    let emblem: Node = match &summary.emblem {
        Some(url) => img(url, &format!("{} emblem", summary.tier))
            .class("rank-emblem")
            .into(),
        None => div("no-ranked").text(&summary.tier_rank).into(),
    };

    let mut right = div("summoner-details-right").child(emblem);
    if summary.is_ranked() {
        right = right.child(div("tier-rank").text(&summary.tier_rank));
    }
    right = right.child(div("wins-losses").text(&summary.record));

    div("summoner-section")
        .child(
            div("summoner-details-left")
                .child(img(
                    &summary.profile_icon,
                    &format!("{}'s Profile Icon", summary.summoner_name),
                ))
                .child(div("summoner-name").text(&summary.summoner_name)),
        )
        .child(div("divider").text("|"))
        .child(right)
        .into()
}

fn player_node(player: &PlayerChip, name_first: bool) -> Node {
    let name = div("other-participant-name").text(&player.summoner_name);
    let icon = img(&player.champion_icon, &format!("{} Icon", player.champion_name));
    let chip = div("other-participant").on_click(Action::Search {
        name: player.summoner_name.clone(),
    });
    let chip = if name_first {
        chip.child(name).child(icon)
    } else {
        chip.child(icon).child(name)
    };
    chip.into()
}

fn participants_node(card: &MatchCardView) -> Node {
    div("participants-container")
        .child(
            div("participants-column")
                .children(card.left.iter().map(|p| player_node(p, true))),
        )
        .child(
            div("participants-column")
                .children(card.right.iter().map(|p| player_node(p, false))),
        )
        .into()
}

pub fn match_card_node(card: &MatchCardView) -> Node {
    let outcome = if card.win { "win" } else { "lose" };
    let kda = div("card-title")
        .child(Element::new("span").class("kills").text(card.kills.to_string()))
        .text("/")
        .child(Element::new("span").class("deaths").text(card.deaths.to_string()))
        .text("/")
        .child(Element::new("span").class("assists").text(card.assists.to_string()));

    let items = div("card-items").children(
        card.items
            .iter()
            .map(|item| img(&item.url, &format!("Item {}", item.id)).into()),
    );

    div(&format!("card {}", outcome))
        .attr("data-match", &card.match_id)
        .child(img(
            &card.champion_icon,
            &format!("{} Icon", card.champion_name),
        ))
        .child(
            div("card-content")
                .child(
                    div("kda-status-container")
                        .child(kda)
                        .child(div("card-status").text(card.status_label())),
                )
                .child(items)
                .child(div("other-participants").child(participants_node(card))),
        )
        .into()
}

pub fn block_node(block: &Block) -> Node {
    match block {
        Block::Summary(summary) => summary_node(summary),
        Block::Match(card) => match_card_node(card),
    }
}

pub fn error_node(message: &str) -> Node {
    div("error").text(message).into()
}

impl Document {
    pub fn to_node(&self) -> Node {
        let mut results = Element::new("div").attr("id", "profile-info");
        if let Some(message) = self.error() {
            results = results.child(error_node(message));
        }
        results = results.children(self.results().iter().map(block_node));

        let mut loading = Element::new("div").attr("id", "loading").text("Loading...");
        if !self.is_loading() {
            loading = loading.attr("hidden", "hidden");
        }

        let show_more = self.show_more();
        let mut button = Element::new("button")
            .attr("id", "show-more")
            .text("Show more");
        if !show_more.visible {
            button = button.attr("hidden", "hidden");
        }
        if !show_more.enabled {
            button = button.attr("disabled", "disabled");
        }

        Element::new("main")
            .child(results)
            .child(loading)
            .child(button)
            .into()
    }

    pub fn to_html(&self) -> String {
        self.to_node().to_html()
    }
}
