use std::path::PathBuf;

use serde_json::{Value, json};

use crate::document::{Document, SURFACE_BACKGROUND, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::error::ExportError;
use crate::shape::{Shape, ShapeKind};

/// Default file names offered by the save dialogs.
pub const SVG_FILE_NAME: &str = "canvas-export.svg";
pub const JSON_FILE_NAME: &str = "canvas-export.json";

fn hex_color(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Escape text for SVG content and attribute values, using only the five
/// standard XML entities.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Restrict character-reference escaping to the five standard XML entities.
///
/// Any `&` that does not begin `&amp;`, `&lt;`, `&gt;`, `&quot;` or `&apos;`
/// (numeric references included) is rewritten to `&amp;`.
pub fn normalize_entities(svg: &str) -> String {
    const STANDARD: [&str; 5] = ["amp;", "lt;", "gt;", "quot;", "apos;"];

    let mut out = String::with_capacity(svg.len());
    let mut rest = svg;
    while let Some(index) = rest.find('&') {
        out.push_str(&rest[..index]);
        let after = &rest[index + 1..];
        if STANDARD.iter().any(|entity| after.starts_with(entity)) {
            out.push('&');
        } else {
            out.push_str("&amp;");
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

fn svg_shape(shape: &Shape) -> String {
    let rect = shape.rect();
    let fill = hex_color(shape.fill());

    match shape.kind() {
        ShapeKind::Text { content, font_size } => {
            // Baseline sits one font-size below the shape's top edge.
            format!(
                "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
                rect.min.x,
                rect.min.y + font_size,
                font_size,
                fill,
                escape_text(content),
            )
        }
        ShapeKind::Rect { size } => format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            rect.min.x, rect.min.y, size.x, size.y, fill,
        ),
        ShapeKind::Circle { radius } => format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            rect.min.x + radius,
            rect.min.y + radius,
            radius,
            fill,
        ),
        ShapeKind::Triangle { size } => format!(
            "  <polygon points=\"{},{} {},{} {},{}\" fill=\"{}\"/>\n",
            rect.min.x + size.x / 2.0,
            rect.min.y,
            rect.min.x + size.x,
            rect.min.y + size.y,
            rect.min.x,
            rect.min.y + size.y,
            fill,
        ),
        ShapeKind::Polygon { points } => {
            let points: Vec<String> = points
                .iter()
                .map(|point| {
                    let pos = shape.position() + *point;
                    format!("{},{}", pos.x, pos.y)
                })
                .collect();
            format!(
                "  <polygon points=\"{}\" fill=\"{}\"/>\n",
                points.join(" "),
                fill,
            )
        }
        ShapeKind::Image {
            src,
            natural_size,
            scale,
            ..
        } => format!(
            "  <image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\"/>\n",
            rect.min.x,
            rect.min.y,
            natural_size.x * scale,
            natural_size.y * scale,
            escape_text(src),
        ),
    }
}

/// Render the document as an SVG string, shapes in stacking order.
pub fn document_to_svg(document: &Document) -> String {
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = SURFACE_WIDTH,
        h = SURFACE_HEIGHT,
    ));
    svg.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        SURFACE_WIDTH,
        SURFACE_HEIGHT,
        hex_color(SURFACE_BACKGROUND),
    ));

    for shape in document.shapes() {
        svg.push_str(&svg_shape(shape));
    }

    svg.push_str("</svg>\n");
    normalize_entities(&svg)
}

fn json_shape(shape: &Shape) -> Value {
    let position = shape.position();
    let mut value = json!({
        "type": shape.kind_name(),
        "left": position.x,
        "top": position.y,
        "fill": hex_color(shape.fill()),
    });

    // serde_json maps are ordered, so merging extra fields stays deterministic.
    let extra = match shape.kind() {
        ShapeKind::Text { content, font_size } => json!({
            "text": content,
            "fontSize": font_size,
        }),
        ShapeKind::Rect { size } | ShapeKind::Triangle { size } => json!({
            "width": size.x,
            "height": size.y,
        }),
        ShapeKind::Circle { radius } => json!({ "radius": radius }),
        ShapeKind::Polygon { points } => json!({
            "points": points
                .iter()
                .map(|point| json!({ "x": point.x, "y": point.y }))
                .collect::<Vec<_>>(),
        }),
        ShapeKind::Image {
            src,
            natural_size,
            scale,
            ..
        } => json!({
            "src": src,
            "width": natural_size.x * scale,
            "height": natural_size.y * scale,
        }),
    };

    if let (Value::Object(target), Value::Object(fields)) = (&mut value, extra) {
        target.extend(fields);
    }

    value
}

/// Structured description of the surface and all its objects.
pub fn document_to_json(document: &Document) -> Value {
    json!({
        "version": 1,
        "width": SURFACE_WIDTH,
        "height": SURFACE_HEIGHT,
        "background": hex_color(SURFACE_BACKGROUND),
        "objects": document.shapes().iter().map(json_shape).collect::<Vec<_>>(),
    })
}

/// Pretty-printed JSON export. Deterministic: exporting twice without edits
/// yields identical bytes.
pub fn json_string(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&document_to_json(document))
}

fn prompt_save_path(file_name: &str, extension: &str, label: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(file_name)
        .add_filter(label, &[extension])
        .save_file()
}

/// Export the surface as SVG via a save dialog. `Ok(None)` means the user
/// cancelled the dialog.
pub fn save_svg(document: &Document) -> Result<Option<PathBuf>, ExportError> {
    let svg = document_to_svg(document);
    let Some(path) = prompt_save_path(SVG_FILE_NAME, "svg", "SVG image") else {
        return Ok(None);
    };
    std::fs::write(&path, svg)?;
    Ok(Some(path))
}

/// Export the surface as JSON via a save dialog. `Ok(None)` means the user
/// cancelled the dialog.
pub fn save_json(document: &Document) -> Result<Option<PathBuf>, ExportError> {
    let json = json_string(document)?;
    let Some(path) = prompt_save_path(JSON_FILE_NAME, "json", "JSON document") else {
        return Ok(None);
    };
    std::fs::write(&path, json)?;
    Ok(Some(path))
}
