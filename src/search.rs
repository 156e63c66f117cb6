use std::collections::HashMap;

use egui::TextureHandle;
use serde::Deserialize;

use crate::config::Config;
use crate::error::FetchError;
use crate::fetch::{DecodedImage, Fetcher};

/// One search-result record, taken verbatim from the provider response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SearchHit {
    pub id: u64,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Comma-separated free text.
    pub tags: String,
}

/// Provider response envelope; only the hit list is consumed.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
}

/// What the results area should show, as a pure function of screen state.
#[derive(Debug, PartialEq)]
pub enum ResultsView<'a> {
    /// Nothing searched yet: invitational message.
    Welcome,
    /// A query produced zero hits: echo it back.
    NoResults { query: &'a str },
    /// One tile per hit, in provider order.
    Grid(&'a [SearchHit]),
}

pub fn results_view<'a>(query: &'a str, hits: &'a [SearchHit]) -> ResultsView<'a> {
    if hits.is_empty() {
        if query.is_empty() {
            ResultsView::Welcome
        } else {
            ResultsView::NoResults { query }
        }
    } else {
        ResultsView::Grid(hits)
    }
}

/// Lazily downloaded tile thumbnail.
pub(crate) enum ThumbnailState {
    Pending,
    Ready(TextureHandle),
    Failed,
}

/// State of the search screen.
pub struct SearchScreen {
    pub(crate) query: String,
    pub(crate) hits: Vec<SearchHit>,
    pub(crate) thumbnails: HashMap<String, ThumbnailState>,
    /// Sequence number of the most recently issued search.
    latest_seq: u64,
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchScreen {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            hits: Vec::new(),
            thumbnails: HashMap::new(),
            latest_seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    /// Reserve the sequence number for a new search. Completions carrying an
    /// older number are discarded when they resolve.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Issue the current query as a search request.
    pub fn submit(&mut self, fetcher: &Fetcher, config: &Config) {
        let seq = self.begin_search();
        log::info!("searching for {:?} (request #{seq})", self.query);
        fetcher.search(seq, config, self.query.clone());
    }

    /// Apply a search completion. Stale completions are dropped; failures
    /// are logged and leave the previous hit list untouched.
    pub fn apply_search_response(&mut self, seq: u64, result: Result<Vec<SearchHit>, FetchError>) {
        if seq != self.latest_seq {
            log::debug!(
                "ignoring stale search response #{seq} (latest is #{})",
                self.latest_seq
            );
            return;
        }

        match result {
            Ok(hits) => {
                log::info!("search returned {} hits", hits.len());
                self.hits = hits;
            }
            Err(err) => {
                log::error!("error fetching images: {err}");
            }
        }
    }

    /// Apply a completed thumbnail download.
    pub fn apply_thumbnail(
        &mut self,
        ctx: &egui::Context,
        url: &str,
        result: Result<DecodedImage, FetchError>,
    ) {
        let Some(state) = self.thumbnails.get_mut(url) else {
            // Thumbnail for a result set that has since been replaced.
            return;
        };

        match result {
            Ok(decoded) => {
                let size = [decoded.width as usize, decoded.height as usize];
                let image = egui::ColorImage::from_rgba_unmultiplied(size, &decoded.rgba);
                let handle =
                    ctx.load_texture(format!("thumb:{url}"), image, egui::TextureOptions::LINEAR);
                *state = ThumbnailState::Ready(handle);
            }
            Err(err) => {
                log::warn!("failed to load thumbnail {url}: {err}");
                *state = ThumbnailState::Failed;
            }
        }
    }
}
