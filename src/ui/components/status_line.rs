use eframe::egui;

use crate::ui::status::{Status, StatusKind};

pub fn color(ui: &egui::Ui, kind: StatusKind) -> egui::Color32 {
    match kind {
        StatusKind::Muted => ui.visuals().weak_text_color(),
        StatusKind::Info => ui.visuals().text_color(),
        StatusKind::Success => egui::Color32::GREEN,
        StatusKind::Error => ui.visuals().error_fg_color,
    }
}

pub fn render(ui: &mut egui::Ui, status: &Status) {
    let color = color(ui, status.kind);
    ui.colored_label(color, &status.text);
}
