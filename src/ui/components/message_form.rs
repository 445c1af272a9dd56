use eframe::egui;

use crate::ui::modal::MessageForm;
use crate::ui::status::Status;

use super::status_line;

// Same limits the backend validates against.
const NAME_LIMIT: usize = 120;
const EMAIL_LIMIT: usize = 180;
const MESSAGE_LIMIT: usize = 2000;

#[derive(Default)]
pub struct FormActions {
    pub submit: bool,
    pub cancel: bool,
    /// Enabled controls in tab order.
    pub focusable: Vec<egui::Id>,
}

pub fn render(ui: &mut egui::Ui, form: &mut MessageForm, status: &Status) -> FormActions {
    let mut actions = FormActions::default();
    let enabled = !form.is_disabled();
    let fields = &mut form.fields;

    let track = |response: &egui::Response, actions: &mut FormActions| {
        if enabled {
            actions.focusable.push(response.id);
        }
    };

    ui.label("Name");
    let name = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut fields.name)
            .id(egui::Id::new("message_form_name"))
            .char_limit(NAME_LIMIT)
            .hint_text("Your name"),
    );
    track(&name, &mut actions);

    ui.label("Email");
    let email = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut fields.email)
            .id(egui::Id::new("message_form_email"))
            .char_limit(EMAIL_LIMIT)
            .hint_text("you@example.com"),
    );
    track(&email, &mut actions);

    ui.label("Message");
    let body = ui.add_enabled(
        enabled,
        egui::TextEdit::multiline(&mut fields.message)
            .id(egui::Id::new("message_form_body"))
            .char_limit(MESSAGE_LIMIT)
            .desired_rows(5),
    );
    track(&body, &mut actions);

    ui.add_space(6.0);
    status_line::render(ui, status);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let send = ui.add_enabled(enabled, egui::Button::new("Send"));
        track(&send, &mut actions);
        if send.clicked() {
            actions.submit = true;
        }

        let cancel = ui.button("Cancel");
        actions.focusable.push(cancel.id);
        if cancel.clicked() {
            actions.cancel = true;
        }
    });

    actions
}
