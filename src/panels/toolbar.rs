use egui::Ui;

/// One-shot toolbar actions on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    AddText,
    AddRectangle,
    AddCircle,
    AddTriangle,
    AddPolygon,
    ExportSvg,
    ExportJson,
}

/// Render the toolbar buttons; returns the action clicked this frame, if any.
pub fn toolbar(ui: &mut Ui) -> Option<ToolbarAction> {
    let buttons = [
        ("Add Text", ToolbarAction::AddText),
        ("Add Rectangle", ToolbarAction::AddRectangle),
        ("Add Circle", ToolbarAction::AddCircle),
        ("Add Triangle", ToolbarAction::AddTriangle),
        ("Add Polygon", ToolbarAction::AddPolygon),
        ("Export SVG", ToolbarAction::ExportSvg),
        ("Export JSON", ToolbarAction::ExportJson),
    ];

    let mut clicked = None;
    for (label, action) in buttons {
        if ui.button(label).clicked() {
            clicked = Some(action);
        }
    }
    clicked
}
