use eframe::egui;

use crate::ui::state::AppState;

#[derive(Default)]
pub struct ToolbarActions {
    pub query: Option<String>,
    pub refresh: bool,
    /// Set to the button's id when "New message" was clicked.
    pub new_message: Option<egui::Id>,
}

pub fn render(ui: &mut egui::Ui, state: &AppState) -> ToolbarActions {
    let mut actions = ToolbarActions::default();

    ui.horizontal(|ui| {
        ui.label("Filter:");
        let mut query = state.filter_query.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query).hint_text("Name, email or message"),
        );
        if response.changed() {
            actions.query = Some(query);
        }

        if ui
            .add_enabled(!state.is_loading(), egui::Button::new("Refresh"))
            .clicked()
        {
            actions.refresh = true;
        }

        let new_message = ui.button("New message");
        if new_message.clicked() {
            actions.new_message = Some(new_message.id);
        }
    });

    actions
}
