use egui::vec2;
use image_quest::panels::ToolbarAction;
use image_quest::{EditScreen, Fetcher};
use image_quest::fetch::DecodedImage;

fn fetcher() -> Fetcher {
    let ctx = egui::Context::default();
    let (fetcher, _responses) = Fetcher::new(ctx).expect("client should build");
    fetcher
}

fn decoded_2x2() -> DecodedImage {
    DecodedImage {
        rgba: vec![255; 2 * 2 * 4],
        width: 2,
        height: 2,
    }
}

#[test]
fn test_missing_image_reference_means_no_surface() {
    let screen = EditScreen::new(None, &fetcher());

    assert!(!screen.has_surface());
    assert!(screen.document().is_empty());
}

#[test]
fn test_loaded_image_becomes_first_object() {
    let url = "https://pixabay.com/a.jpg";
    let mut screen = EditScreen::new(Some(url.to_owned()), &fetcher());

    // The user adds shapes before the download resolves.
    screen.apply_action(ToolbarAction::AddText);
    screen.apply_action(ToolbarAction::AddRectangle);

    screen.apply_image_loaded(url, Ok(decoded_2x2()));

    let shapes = screen.document().shapes();
    assert_eq!(shapes.len(), 3);
    assert_eq!(shapes[0].kind_name(), "image");
    // Half the natural size, offset from the origin
    assert_eq!(shapes[0].rect().size(), vec2(1.0, 1.0));
    assert_eq!(shapes[0].position(), egui::pos2(100.0, 100.0));
}

#[test]
fn test_stale_image_completion_is_ignored() {
    let url = "https://pixabay.com/a.jpg";
    let mut screen = EditScreen::new(Some(url.to_owned()), &fetcher());

    screen.apply_image_loaded("https://pixabay.com/other.jpg", Ok(decoded_2x2()));
    assert!(screen.document().is_empty());

    // The matching URL still lands afterwards.
    screen.apply_image_loaded(url, Ok(decoded_2x2()));
    assert_eq!(screen.document().len(), 1);

    // A duplicate completion for a no-longer-pending load is dropped.
    screen.apply_image_loaded(url, Ok(decoded_2x2()));
    assert_eq!(screen.document().len(), 1);
}

#[test]
fn test_each_add_action_appends_exactly_one_shape() {
    let mut screen = EditScreen::new(Some("https://pixabay.com/a.jpg".to_owned()), &fetcher());

    let actions = [
        (ToolbarAction::AddText, "text"),
        (ToolbarAction::AddRectangle, "rect"),
        (ToolbarAction::AddCircle, "circle"),
        (ToolbarAction::AddTriangle, "triangle"),
        (ToolbarAction::AddPolygon, "polygon"),
    ];

    for (index, (action, kind_name)) in actions.into_iter().enumerate() {
        screen.apply_action(action);
        let shapes = screen.document().shapes();
        assert_eq!(shapes.len(), index + 1);
        assert_eq!(shapes[index].kind_name(), kind_name);
    }

    // Prior shapes are untouched by later adds
    let first = &screen.document().shapes()[0];
    assert_eq!(first.kind_name(), "text");
    assert_eq!(first.position(), egui::pos2(100.0, 100.0));
}

#[test]
fn test_failed_image_load_leaves_surface_usable() {
    let url = "https://pixabay.com/a.jpg";
    let mut screen = EditScreen::new(Some(url.to_owned()), &fetcher());

    let err = image_quest::error::FetchError::Decode(image::ImageError::IoError(
        std::io::Error::other("boom"),
    ));
    screen.apply_image_loaded(url, Err(err));

    assert!(screen.has_surface());
    assert!(screen.document().is_empty());

    screen.apply_action(ToolbarAction::AddCircle);
    assert_eq!(screen.document().len(), 1);
}
