use std::sync::mpsc::Receiver;

use crate::config::Config;
use crate::editor::EditScreen;
use crate::fetch::{FetchResponse, Fetcher};
use crate::panels;
use crate::route::Route;
use crate::search::SearchScreen;

/// The screen currently on display. There is no state shared between the
/// two beyond the image URL carried by the route.
enum Screen {
    Search(SearchScreen),
    Edit(EditScreen),
}

/// Top-level application: owns the active screen, the background fetcher
/// and the channel its completions arrive on.
pub struct QuestApp {
    config: Config,
    fetcher: Fetcher,
    responses: Receiver<FetchResponse>,
    screen: Screen,
}

impl QuestApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Result<Self, reqwest::Error> {
        let (fetcher, responses) = Fetcher::new(cc.egui_ctx.clone())?;

        Ok(Self {
            config,
            fetcher,
            responses,
            screen: Screen::Search(SearchScreen::new()),
        })
    }

    /// Parse a navigation path and swap the active screen. Swapping away
    /// from the edit screen drops its document and textures.
    pub fn navigate(&mut self, path: &str) {
        log::info!("navigating to {path}");
        match Route::parse(path) {
            Route::Search => self.screen = Screen::Search(SearchScreen::new()),
            Route::Edit(image_url) => {
                self.screen = Screen::Edit(EditScreen::new(image_url, &self.fetcher));
            }
        }
    }

    /// Deliver completed background requests to the active screen.
    /// Completions addressed to a screen that is no longer active are dropped.
    fn drain_responses(&mut self, ctx: &egui::Context) {
        while let Ok(response) = self.responses.try_recv() {
            match (response, &mut self.screen) {
                (FetchResponse::Search { seq, result }, Screen::Search(search)) => {
                    search.apply_search_response(seq, result);
                }
                (FetchResponse::Image { url, result }, Screen::Search(search)) => {
                    search.apply_thumbnail(ctx, &url, result);
                }
                (FetchResponse::Image { url, result }, Screen::Edit(edit)) => {
                    edit.apply_image_loaded(&url, result);
                }
                (FetchResponse::Search { .. }, Screen::Edit(_)) => {
                    log::debug!("dropping search completion; search screen is gone");
                }
            }
        }
    }
}

impl eframe::App for QuestApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_responses(ctx);

        let navigate = match &mut self.screen {
            Screen::Search(search) => panels::search_panel(search, &self.fetcher, &self.config, ctx),
            Screen::Edit(edit) => edit.show(ctx),
        };

        if let Some(path) = navigate {
            self.navigate(&path);
        }
    }
}
