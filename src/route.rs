use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped when embedding an image URL as a path segment.
///
/// Matches `encodeURIComponent`: everything except `A-Z a-z 0-9 - _ . ~ ! * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The two screens of the application, addressed by path strings.
///
/// `Edit(None)` means the edit screen was reached without a usable image
/// reference; the screen renders a fallback message instead of a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Search,
    Edit(Option<String>),
}

impl Route {
    /// Parse a navigation path. Never fails: an unknown path falls back to
    /// the search screen, and a missing or undecodable image segment yields
    /// `Edit(None)`.
    pub fn parse(path: &str) -> Self {
        let path = path.trim_start_matches('/');

        if let Some(rest) = path.strip_prefix("edit") {
            // Only `/edit` itself or `/edit/<segment>`; `/editorial` is not ours.
            if rest.is_empty() || rest.starts_with('/') {
                let segment = rest.trim_start_matches('/');
                if segment.is_empty() {
                    return Route::Edit(None);
                }
                return match percent_decode_str(segment).decode_utf8() {
                    Ok(url) => Route::Edit(Some(url.into_owned())),
                    Err(err) => {
                        log::warn!("undecodable image reference in path {path:?}: {err}");
                        Route::Edit(None)
                    }
                };
            }
        }

        Route::Search
    }

    /// The path a search tile links to for the given image URL.
    pub fn edit_path(image_url: &str) -> String {
        format!("/edit/{}", utf8_percent_encode(image_url, COMPONENT))
    }

    /// Render the route back into a path string.
    pub fn to_path(&self) -> String {
        match self {
            Route::Search => "/".to_owned(),
            Route::Edit(None) => "/edit".to_owned(),
            Route::Edit(Some(url)) => Self::edit_path(url),
        }
    }
}
