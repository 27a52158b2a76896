use crate::api::client::MatchSource;
use crate::api::endpoints;
use crate::api::models::{Participant, SearchRequest};
use crate::config::Config;
use crate::error::AppError;
use crate::history::{find_main_participant, group_by_match};
use crate::preload::{ImageLoader, PreloadSet};
use crate::region::Region;
use crate::session::Session;
use crate::view::cards::{self, Assets};
use crate::view::{Action, Block, Document};
use tracing::{debug, info, warn};

/// Pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub start: usize,
    pub count: usize,
}

impl Cursor {
    pub fn first_page(count: usize) -> Self {
        Cursor { start: 0, count }
    }

    pub fn next(self) -> Self {
        Cursor {
            start: self.start + self.count,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered {
        cards: usize,
        images_loaded: usize,
        images_failed: usize,
    },
    ErrorShown(String),
    /// A newer fetch was started before this one completed.
    Stale,
}

/// Shown while a fetch is running.
pub trait LoadingIndicator {
    fn start(&self, message: &str);
    fn stop(&self);
}

pub struct NoIndicator;

impl LoadingIndicator for NoIndicator {
    fn start(&self, _message: &str) {}
    fn stop(&self) {}
}

/// A fetch that has been issued but not completed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    generation: u64,
    cursor: Cursor,
    fresh: bool,
    request: SearchRequest,
}

impl PendingFetch {
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_fresh_search(&self) -> bool {
        self.fresh
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveSearch {
    term: String,
    region: Region,
}

pub struct MatchHistoryRenderer<S, L> {
    source: S,
    loader: L,
    indicator: Box<dyn LoadingIndicator>,
    assets: Assets,
    page_size: usize,
    default_region: Region,
    cursor: Cursor,
    active: Option<ActiveSearch>,
    preloaded: PreloadSet,
    session: Session,
    document: Document,
    state: RenderState,
    generation: u64,
}

impl<S: MatchSource, L: ImageLoader> MatchHistoryRenderer<S, L> {
    pub fn new(source: S, loader: L, config: &Config, session: Session) -> Self {
        let page_size = config.page_size.max(1);
        MatchHistoryRenderer {
            source,
            loader,
            indicator: Box::new(NoIndicator),
            assets: Assets::new(config.asset_base.as_str()),
            page_size,
            default_region: config.region,
            cursor: Cursor::first_page(page_size),
            active: None,
            preloaded: PreloadSet::new(),
            session,
            document: Document::new(),
            state: RenderState::Idle,
            generation: 0,
        }
    }

    pub fn with_indicator(mut self, indicator: Box<dyn LoadingIndicator>) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn preloaded(&self) -> &PreloadSet {
        &self.preloaded
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The region of the current search, if any.
    pub fn region(&self) -> Option<Region> {
        self.active.as_ref().map(|a| a.region)
    }

    /// Region for the next search started from the UI: the current search's,
    /// or the configured one when nothing is active.
    pub fn current_region(&self) -> Region {
        self.region().unwrap_or(self.default_region)
    }

    pub fn search(&mut self, term: &str, region: Region) -> Outcome {
        match self.begin_search(term, region) {
            Some(pending) => self.run(pending),
            None => Outcome::ErrorShown(self.document.error().unwrap_or_default().to_string()),
        }
    }

    pub fn load_more(&mut self) -> Result<Outcome, AppError> {
        let pending = self.begin_load_more()?;
        Ok(self.run(pending))
    }

    /// Follows a click on a rendered player, searching them in the current
    /// region.
    pub fn dispatch(&mut self, action: &Action) -> Outcome {
        let region = self.current_region();
        match action {
            Action::Search { name } => self.search(name, region),
        }
    }

    fn run(&mut self, pending: PendingFetch) -> Outcome {
        let result = self.source.search(pending.request());
        self.complete(pending, result)
    }

    /// Starts a fresh search: resets the cursor and clears the results.
    /// Returns `None` when the term is blank; the error is shown inline.
    pub fn begin_search(&mut self, term: &str, region: Region) -> Option<PendingFetch> {
        let term = term.trim();
        self.cursor = Cursor::first_page(self.page_size);
        self.document.clear_results();

        if term.is_empty() {
            // Anything still in flight belongs to the abandoned search.
            self.generation += 1;
            self.state = RenderState::Idle;
            self.active = None;
            self.document.set_loading(false);
            self.indicator.stop();
            self.document.set_show_more(false);
            self.document.show_error("Enter a summoner name to search");
            return None;
        }

        if let Err(e) = self.session.remember(term, region) {
            warn!("could not persist last search: {}", e);
        }
        let search = ActiveSearch {
            term: term.to_string(),
            region,
        };
        self.active = Some(search.clone());
        Some(self.begin(search, self.cursor, true))
    }

    pub fn begin_load_more(&mut self) -> Result<PendingFetch, AppError> {
        if self.state == RenderState::Loading {
            return Err(AppError::Busy);
        }
        let search = self.active.clone().ok_or(AppError::NoActiveSearch)?;
        self.document.set_show_more_enabled(false);
        Ok(self.begin(search, self.cursor.next(), false))
    }

    fn begin(&mut self, search: ActiveSearch, cursor: Cursor, fresh: bool) -> PendingFetch {
        let ActiveSearch { term, region } = search;

        self.generation += 1;
        self.state = RenderState::Loading;
        self.document.set_loading(true);
        if fresh {
            self.document.set_show_more(false);
        }
        self.indicator
            .start(&format!("Fetching matches for {} ({})", term, region));

        PendingFetch {
            generation: self.generation,
            cursor,
            fresh,
            request: SearchRequest {
                url: endpoints::summoner_by_name(&term),
                region,
                count: cursor.count,
                start: cursor.start,
            },
        }
    }

    /// Applies the backend's answer to a fetch started with `begin_search`
    /// or `begin_load_more`.
    pub fn complete(
        &mut self,
        pending: PendingFetch,
        result: Result<Vec<Participant>, AppError>,
    ) -> Outcome {
        if pending.generation != self.generation {
            debug!(
                generation = pending.generation,
                latest = self.generation,
                "dropping stale response"
            );
            return Outcome::Stale;
        }

        let outcome = match result {
            Ok(participants) => self.render_page(&pending, participants),
            Err(e) => {
                let message = e.to_string();
                warn!("search failed: {}", message);
                self.document.show_error(message.clone());
                // A failed first page leaves nothing to page through.
                self.document.set_show_more(!pending.fresh);
                Outcome::ErrorShown(message)
            }
        };

        self.document.set_show_more_enabled(true);
        self.document.set_loading(false);
        self.indicator.stop();
        self.state = RenderState::Idle;
        outcome
    }

    fn render_page(&mut self, pending: &PendingFetch, participants: Vec<Participant>) -> Outcome {
        let groups = group_by_match(participants);
        let mut blocks = Vec::with_capacity(groups.len() + 1);

        if pending.cursor.start == 0 {
            if let Some(main) = find_main_participant(&groups) {
                blocks.push(Block::Summary(cards::summary_view(main, &self.assets)));
            }
        }

        let mut match_cards = Vec::with_capacity(groups.len());
        for group in &groups {
            match cards::match_card(group, &self.assets) {
                Some(card) => match_cards.push(card),
                None => debug!(match_id = %group.match_id, "no main participant, skipping match"),
            }
        }

        let icons = cards::champion_icon_urls(&match_cards);
        let report = self
            .preloaded
            .preload(icons.iter().map(String::as_str), &self.loader);

        let rendered = match_cards.len();
        blocks.extend(match_cards.into_iter().map(Block::Match));

        self.document.clear_error();
        self.document.append(blocks);
        self.document.set_show_more(rendered > 0);
        self.cursor = pending.cursor;

        info!(
            start = pending.cursor.start,
            groups = groups.len(),
            cards = rendered,
            "rendered page"
        );

        Outcome::Rendered {
            cards: rendered,
            images_loaded: report.requested,
            images_failed: report.failed.len(),
        }
    }
}
