use eframe::egui;

/// Asks before deleting. `Some(true)` confirms, `Some(false)` cancels.
pub fn render(ctx: &egui::Context, author: &str) -> Option<bool> {
    let mut decision = None;

    let modal = egui::Modal::new(egui::Id::new("confirm_delete")).show(ctx, |ui| {
        ui.heading("Delete message");
        ui.label(format!("Delete the message from {author}? This cannot be undone."));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Delete").clicked() {
                decision = Some(true);
            }
            if ui.button("Cancel").clicked() {
                decision = Some(false);
            }
        });
    });

    if decision.is_none() && modal.should_close() {
        decision = Some(false);
    }
    decision
}
