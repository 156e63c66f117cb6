use egui::{Key, TextEdit, Ui, load::SizedTexture};

use crate::config::Config;
use crate::fetch::Fetcher;
use crate::route::Route;
use crate::search::{ResultsView, SearchHit, SearchScreen, ThumbnailState, results_view};

const TILE_SIZE: egui::Vec2 = egui::Vec2::new(200.0, 140.0);
const TAG_PREVIEW_CHARS: usize = 30;

/// Render the search screen. Returns a navigation path when a tile is clicked.
pub fn search_panel(
    screen: &mut SearchScreen,
    fetcher: &Fetcher,
    config: &Config,
    ctx: &egui::Context,
) -> Option<String> {
    let mut navigate = None;

    egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
        ui.heading("Image Quest");
        ui.horizontal(|ui| {
            let field = ui.add(
                TextEdit::singleline(&mut screen.query)
                    .desired_width(420.0)
                    .hint_text("Search for cool stuff (e.g., batman, superman, joker)..."),
            );
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.button("Go!").clicked() || submitted {
                screen.submit(fetcher, config);
            }
        });
        ui.add_space(4.0);
    });

    // Thumbnail requests found while rendering; issued after the hit list
    // borrow is released.
    let mut wanted_thumbnails: Vec<String> = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        match results_view(&screen.query, &screen.hits) {
            ResultsView::Welcome => {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Ready for an adventure?");
                    ui.label("Search for something fun like \"unicorns\" or \"rainbows\"!");
                });
            }
            ResultsView::NoResults { query } => {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Oops! No pics for \"{query}\""));
                    ui.label("Try something else, like \"balloons\" or \"puppies\"!");
                });
            }
            ResultsView::Grid(hits) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for hit in hits {
                            if let Some(path) = result_tile(
                                ui,
                                hit,
                                &screen.thumbnails,
                                &mut wanted_thumbnails,
                            ) {
                                navigate = Some(path);
                            }
                        }
                    });
                });
            }
        }
    });

    for url in wanted_thumbnails {
        // The same URL can show up on several tiles in one frame.
        if screen
            .thumbnails
            .insert(url.clone(), ThumbnailState::Pending)
            .is_none()
        {
            fetcher.fetch_image(url);
        }
    }

    navigate
}

/// One result tile: thumbnail (once loaded), tag preview, caption button.
/// Returns the edit-screen path when clicked.
fn result_tile(
    ui: &mut Ui,
    hit: &SearchHit,
    thumbnails: &std::collections::HashMap<String, ThumbnailState>,
    wanted: &mut Vec<String>,
) -> Option<String> {
    let mut open = false;

    ui.vertical(|ui| {
        ui.set_width(TILE_SIZE.x);

        match thumbnails.get(&hit.webformat_url) {
            Some(ThumbnailState::Ready(handle)) => {
                let image = egui::Image::from_texture(SizedTexture::new(handle.id(), TILE_SIZE));
                if ui.add(egui::ImageButton::new(image)).clicked() {
                    open = true;
                }
            }
            Some(ThumbnailState::Pending) => {
                ui.add_sized(TILE_SIZE, egui::Spinner::new());
            }
            Some(ThumbnailState::Failed) => {
                ui.add_sized(TILE_SIZE, egui::Label::new("(preview unavailable)"));
            }
            None => {
                wanted.push(hit.webformat_url.clone());
                ui.add_sized(TILE_SIZE, egui::Spinner::new());
            }
        }

        ui.label(tag_preview(&hit.tags));
        if ui.button("Add Caption").clicked() {
            open = true;
        }
        ui.add_space(8.0);
    });

    open.then(|| Route::edit_path(&hit.webformat_url))
}

/// Truncate the comma-separated tag list for display on a tile.
fn tag_preview(tags: &str) -> String {
    if tags.chars().count() > TAG_PREVIEW_CHARS {
        let preview: String = tags.chars().take(TAG_PREVIEW_CHARS).collect();
        format!("{preview}...")
    } else {
        tags.to_owned()
    }
}
