use image_quest::error::FetchError;
use image_quest::search::{ResultsView, SearchHit, SearchResponse, results_view};
use image_quest::{Config, Fetcher, SearchScreen};

fn hit(id: u64, url: &str, tags: &str) -> SearchHit {
    SearchHit {
        id,
        webformat_url: url.to_owned(),
        tags: tags.to_owned(),
    }
}

fn network_error() -> FetchError {
    FetchError::Decode(image::ImageError::IoError(std::io::Error::other("boom")))
}

#[test]
fn test_empty_query_and_no_hits_shows_welcome() {
    assert_eq!(results_view("", &[]), ResultsView::Welcome);
}

#[test]
fn test_query_with_no_hits_echoes_the_query() {
    match results_view("unicorns", &[]) {
        ResultsView::NoResults { query } => assert_eq!(query, "unicorns"),
        other => panic!("expected the no-results view, got {other:?}"),
    }
}

#[test]
fn test_hits_render_one_tile_each() {
    let hits = vec![
        hit(1, "https://pixabay.com/a.jpg", "cat"),
        hit(2, "https://pixabay.com/b.jpg", "dog"),
        hit(3, "https://pixabay.com/c.jpg", "bird"),
    ];

    match results_view("animals", &hits) {
        ResultsView::Grid(shown) => assert_eq!(shown.len(), 3),
        other => panic!("expected the grid view, got {other:?}"),
    }
}

#[test]
fn test_hits_parse_from_provider_payload() {
    let payload = r#"{
        "total": 2,
        "totalHits": 2,
        "hits": [
            { "id": 11, "webformatURL": "https://pixabay.com/a.jpg", "tags": "batman, hero", "views": 10 },
            { "id": 22, "webformatURL": "https://pixabay.com/b.jpg", "tags": "joker", "views": 3 }
        ]
    }"#;

    let response: SearchResponse = serde_json::from_str(payload).expect("payload should parse");
    assert_eq!(response.hits.len(), 2);
    assert_eq!(response.hits[0].id, 11);
    assert_eq!(response.hits[0].webformat_url, "https://pixabay.com/a.jpg");
    assert_eq!(response.hits[1].tags, "joker");
}

#[test]
fn test_latest_response_wins() {
    let mut screen = SearchScreen::new();
    screen.set_query("unicorns");

    let first = screen.begin_search();
    let second = screen.begin_search();

    screen.apply_search_response(second, Ok(vec![hit(2, "https://pixabay.com/b.jpg", "new")]));
    // The earlier request resolves later; it must be discarded.
    screen.apply_search_response(first, Ok(vec![hit(1, "https://pixabay.com/a.jpg", "old")]));

    assert_eq!(screen.hits().len(), 1);
    assert_eq!(screen.hits()[0].id, 2);
}

#[test]
fn test_failure_preserves_previous_results() {
    let mut screen = SearchScreen::new();
    screen.set_query("unicorns");

    let seq = screen.begin_search();
    screen.apply_search_response(seq, Ok(vec![hit(1, "https://pixabay.com/a.jpg", "kept")]));

    let seq = screen.begin_search();
    screen.apply_search_response(seq, Err(network_error()));

    assert_eq!(screen.hits().len(), 1);
    assert_eq!(screen.hits()[0].tags, "kept");
}

#[test]
fn test_submit_advances_the_sequence() {
    let (fetcher, _responses) =
        Fetcher::new(egui::Context::default()).expect("client should build");
    // Nothing listens on the discard port; the request simply fails in the
    // background and is never applied.
    let config = Config::new("test-key", "http://127.0.0.1:9/api/");

    let mut screen = SearchScreen::new();
    screen.set_query("unicorns");
    screen.submit(&fetcher, &config);

    // A completion numbered before the submit is stale now.
    screen.apply_search_response(0, Ok(vec![hit(1, "https://pixabay.com/a.jpg", "stale")]));
    assert!(screen.hits().is_empty());
}

#[test]
fn test_successful_response_replaces_results_verbatim() {
    let mut screen = SearchScreen::new();
    screen.set_query("cats");

    let seq = screen.begin_search();
    screen.apply_search_response(seq, Ok(vec![hit(1, "https://pixabay.com/a.jpg", "cat")]));

    let replacement = vec![
        hit(5, "https://pixabay.com/e.jpg", "kitten"),
        hit(6, "https://pixabay.com/f.jpg", "tabby"),
    ];
    let seq = screen.begin_search();
    screen.apply_search_response(seq, Ok(replacement.clone()));

    assert_eq!(screen.hits(), replacement.as_slice());
}
