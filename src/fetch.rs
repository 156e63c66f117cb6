use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::config::Config;
use crate::error::FetchError;
use crate::search::{SearchHit, SearchResponse};

/// Image bytes decoded to straight RGBA, ready for texture upload.
pub struct DecodedImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Completion of a background request, delivered over the response channel.
pub enum FetchResponse {
    Search {
        /// Sequence number the request carried at issue time. The receiver
        /// applies a completion only if it is still the latest one issued.
        seq: u64,
        result: Result<Vec<SearchHit>, FetchError>,
    },
    Image {
        url: String,
        result: Result<DecodedImage, FetchError>,
    },
}

/// Issues HTTP requests on worker threads and reports completions over a
/// channel. There is no cancellation and no timeout beyond the client
/// defaults; staleness is resolved on the receiving end.
pub struct Fetcher {
    client: reqwest::blocking::Client,
    tx: Sender<FetchResponse>,
    ctx: egui::Context,
}

impl Fetcher {
    /// Build the fetcher and the channel the app drains every frame.
    pub fn new(ctx: egui::Context) -> Result<(Self, Receiver<FetchResponse>), reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("image-quest/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let (tx, rx) = channel();

        Ok((Self { client, tx, ctx }, rx))
    }

    /// Issue one search request. `seq` is the caller's sequence number for
    /// the last-response-wins rule.
    pub fn search(&self, seq: u64, config: &Config, query: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        let endpoint = config.endpoint.clone();
        let key = config.api_key.clone();

        thread::spawn(move || {
            let result = run_search(&client, &endpoint, &key, &query);
            // The receiver may already be gone (app shutdown); nothing to do then.
            if tx.send(FetchResponse::Search { seq, result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    /// Download and decode one image (thumbnail or surface background).
    pub fn fetch_image(&self, url: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();

        thread::spawn(move || {
            let result = run_image(&client, &url);
            if tx.send(FetchResponse::Image { url, result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }
}

fn run_search(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    key: &str,
    query: &str,
) -> Result<Vec<SearchHit>, FetchError> {
    let response: SearchResponse = client
        .get(endpoint)
        .query(&[("key", key), ("q", query), ("image_type", "photo")])
        .send()?
        .error_for_status()?
        .json()?;

    Ok(response.hits)
}

fn run_image(client: &reqwest::blocking::Client, url: &str) -> Result<DecodedImage, FetchError> {
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;

    let decoded = image::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();

    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
