use super::cards::{MatchCardView, SummaryView};
use super::node::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Summary(SummaryView),
    Match(MatchCardView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMore {
    pub visible: bool,
    pub enabled: bool,
}

/// The host page: the results container, an inline error slot, the loading
/// indicator and the "show more" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    results: Vec<Block>,
    error: Option<String>,
    loading: bool,
    show_more: ShowMore,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            results: Vec::new(),
            error: None,
            loading: false,
            show_more: ShowMore {
                visible: false,
                enabled: true,
            },
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[Block] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn show_more(&self) -> ShowMore {
        self.show_more
    }

    pub fn summary(&self) -> Option<&SummaryView> {
        self.results.iter().find_map(|block| match block {
            Block::Summary(summary) => Some(summary),
            Block::Match(_) => None,
        })
    }

    pub fn match_cards(&self) -> impl Iterator<Item = &MatchCardView> {
        self.results.iter().filter_map(|block| match block {
            Block::Match(card) => Some(card),
            Block::Summary(_) => None,
        })
    }

    /// Player click targets across all cards, in display order.
    pub fn actions(&self) -> Vec<Action> {
        self.match_cards()
            .flat_map(MatchCardView::players)
            .map(|p| Action::Search {
                name: p.summoner_name.clone(),
            })
            .collect()
    }

    pub(crate) fn clear_results(&mut self) {
        self.results.clear();
        self.error = None;
    }

    pub(crate) fn append(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.results.extend(blocks);
    }

    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_show_more(&mut self, visible: bool) {
        self.show_more.visible = visible;
    }

    pub(crate) fn set_show_more_enabled(&mut self, enabled: bool) {
        self.show_more.enabled = enabled;
    }
}
