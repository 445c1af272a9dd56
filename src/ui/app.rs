use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiError, ApiEvent};

use super::components::{confirm_dialog, message_form, message_list, status_line, toolbar};
use super::modal::{FocusSurface, trap_tab};
use super::state::{Action, AppState, Effect};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ContactApp {
    state: AppState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl ContactApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        let mut app = Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        };
        app.dispatch(&cc.egui_ctx, Action::Start, Instant::now());
        app
    }

    fn handle_api_events(&mut self, ctx: &egui::Context, now: Instant) {
        while let Ok(event) = self.event_receiver.try_recv() {
            let effects = self.state.apply_event(event, now);
            self.perform(ctx, effects, now);
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: Action, now: Instant) {
        let effects = self.state.dispatch(action, now);
        self.perform(ctx, effects, now);
    }

    fn perform(&mut self, ctx: &egui::Context, effects: Vec<Effect>, now: Instant) {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Api(command) => {
                    if let Err(err) = self.command_sender.try_send(command) {
                        log::warn!("Failed to send command to network: {err}");
                        let command = err.into_inner();
                        let event = ApiEvent::failed(
                            command,
                            ApiError::Transport("network task unavailable".to_string()),
                        );
                        queue.extend(self.state.apply_event(event, now));
                    }
                }
                Effect::RestoreFocus(id) => ctx.memory_mut(|memory| memory.request_focus(id)),
            }
        }
    }

    fn show_form_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let tab = ctx.input(|input| {
            input
                .key_pressed(egui::Key::Tab)
                .then_some(input.modifiers.shift)
        });
        let focused_before = ctx.memory(|memory| memory.focused());

        let title = self.state.modal.title();
        let (form, status) = (&mut self.state.form, self.state.status.form());
        let modal = egui::Modal::new(egui::Id::new("message_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading(title);
            ui.separator();
            message_form::render(ui, form, status)
        });
        let should_close = modal.should_close();
        let actions = modal.inner;

        if let Some(backward) = tab {
            let mut surface = DialogFocus {
                ctx,
                widgets: actions.focusable,
                focused: focused_before,
            };
            trap_tab(&mut surface, backward);
        }

        if actions.submit {
            self.dispatch(ctx, Action::Submit, now);
        } else if actions.cancel || should_close {
            self.dispatch(ctx, Action::CloseModal, now);
        }
    }

    fn show_confirm_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(id) = self.state.confirm_delete.as_deref() else {
            return;
        };
        let author = self
            .state
            .cache
            .get(id)
            .map(|message| message.display_name().to_string())
            .unwrap_or_else(|| "this author".to_string());

        match confirm_dialog::render(ctx, &author) {
            Some(true) => self.dispatch(ctx, Action::ConfirmDelete, now),
            Some(false) => self.dispatch(ctx, Action::CancelDelete, now),
            None => {}
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if !self.state.is_busy() {
            return;
        }
        let wait = self
            .state
            .status
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(POLL_INTERVAL, |until| until.min(POLL_INTERVAL));
        ctx.request_repaint_after(wait);
    }
}

/// Focus inside the open dialog, as seen at the start of the frame.
struct DialogFocus<'a> {
    ctx: &'a egui::Context,
    widgets: Vec<egui::Id>,
    focused: Option<egui::Id>,
}

impl FocusSurface for DialogFocus<'_> {
    type Target = egui::Id;

    fn focusable(&self) -> Vec<egui::Id> {
        self.widgets.clone()
    }

    fn focused(&self) -> Option<egui::Id> {
        self.focused
    }

    fn focus(&mut self, target: egui::Id) {
        self.focused = Some(target);
        self.ctx.memory_mut(|memory| memory.request_focus(target));
    }
}

impl eframe::App for ContactApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_api_events(ctx, now);
        self.dispatch(ctx, Action::Tick, now);

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Contact messages");
            ui.separator();

            let bar = toolbar::render(ui, &self.state);
            if let Some(query) = bar.query {
                actions.push(Action::FilterChanged(query));
            }
            if bar.refresh {
                actions.push(Action::Refresh);
            }
            if let Some(button) = bar.new_message {
                actions.push(Action::OpenCreate {
                    return_focus: Some(button),
                });
            }

            status_line::render(ui, self.state.status.list());
            ui.separator();

            let list = message_list::render(ui, &self.state);
            if let Some((id, button)) = list.edit {
                actions.push(Action::OpenEdit {
                    id,
                    return_focus: Some(button),
                });
            }
            if let Some(id) = list.delete {
                actions.push(Action::RequestDelete(id));
            }
        });

        for action in actions {
            self.dispatch(ctx, action, now);
        }

        if self.state.modal.is_open() {
            self.show_form_modal(ctx, now);
        }
        self.show_confirm_modal(ctx, now);

        self.schedule_repaint(ctx, now);
    }
}
