use eframe::egui;

use crate::common::{Message, MessageId};
use crate::ui::state::AppState;

#[derive(Default)]
pub struct ListActions {
    /// Message to edit and the button that asked for it.
    pub edit: Option<(MessageId, egui::Id)>,
    pub delete: Option<MessageId>,
}

/// Screen-reader labels for a row's edit and delete buttons.
pub fn action_labels(message: &Message) -> (String, String) {
    let name = message.display_name();
    (
        format!("Edit message from {name}"),
        format!("Delete message from {name}"),
    )
}

pub fn render(ui: &mut egui::Ui, state: &AppState) -> ListActions {
    let mut actions = ListActions::default();

    if let Some(empty) = state.empty_state() {
        let color = if empty.is_error() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().weak_text_color()
        };
        ui.colored_label(color, empty.text());
        return actions;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for message in state.visible() {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                render_row(ui, state, message, &mut actions);
            });
        }
    });

    actions
}

fn render_row(ui: &mut egui::Ui, state: &AppState, message: &Message, actions: &mut ListActions) {
    ui.horizontal(|ui| {
        ui.strong(message.display_name());
        ui.label(message.display_email());
        ui.label(egui::RichText::new(message.display_date()).weak());
    });
    ui.label(&message.message);

    // Without an id there is nothing to address on the server.
    let Some(id) = message.id.as_deref() else {
        return;
    };
    let (edit_label, delete_label) = action_labels(message);
    let deleting = state.is_deleting(id);

    ui.horizontal(|ui| {
        let edit = ui
            .add_enabled(!state.modal.is_open(), egui::Button::new("Edit"))
            .on_hover_text(&edit_label);
        edit.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, !state.modal.is_open(), &edit_label)
        });
        if edit.clicked() {
            actions.edit = Some((id.to_string(), edit.id));
        }

        let delete_text = if deleting { "Deleting..." } else { "Delete" };
        let delete = ui
            .add_enabled(!deleting, egui::Button::new(delete_text))
            .on_hover_text(&delete_label);
        delete.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, !deleting, &delete_label)
        });
        if delete.clicked() {
            actions.delete = Some(id.to_string());
        }
    });
}
