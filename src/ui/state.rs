use std::collections::HashSet;
use std::time::Instant;

use eframe::egui;

use crate::common::{ApiCommand, ApiError, ApiEvent, Message, MessageId, WriteAck};
use crate::storage::{MessageCache, filter};

use super::modal::{MessageForm, ModalState};
use super::status::{StatusKind, StatusReporter};

/// User intents the UI can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    Refresh,
    FilterChanged(String),
    OpenCreate { return_focus: Option<egui::Id> },
    OpenEdit {
        id: MessageId,
        return_focus: Option<egui::Id>,
    },
    CloseModal,
    Submit,
    RequestDelete(MessageId),
    ConfirmDelete,
    CancelDelete,
    Tick,
}

/// Work the shell must carry out after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Api(ApiCommand),
    RestoreFocus(egui::Id),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoMessages,
    LoadFailed,
    NoMatches,
}

impl EmptyState {
    pub fn text(self) -> &'static str {
        match self {
            EmptyState::NoMessages => "No messages yet.",
            EmptyState::LoadFailed => "Could not load messages.",
            EmptyState::NoMatches => "No messages match the current filter.",
        }
    }

    pub fn is_error(self) -> bool {
        self == EmptyState::LoadFailed
    }
}

/// Everything the window shows, driven by `dispatch` and `apply_event`.
#[derive(Debug, Default)]
pub struct AppState {
    pub cache: MessageCache,
    pub filter_query: String,
    pub modal: ModalState,
    pub form: MessageForm,
    pub confirm_delete: Option<MessageId>,
    pub status: StatusReporter,
    deleting: HashSet<MessageId>,
    loading: bool,
    refetch_queued: bool,
    load_failed: bool,
    /// Dialog the outstanding write was submitted from.
    pending_write: Option<ModalState>,
    return_focus: Option<egui::Id>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) -> Vec<Effect> {
        match action {
            Action::Start | Action::Refresh => {
                if self.loading {
                    return Vec::new();
                }
                self.start_fetch(true, now)
            }
            Action::FilterChanged(query) => {
                self.filter_query = query;
                self.refresh_counts();
                Vec::new()
            }
            Action::OpenCreate { return_focus } => {
                if self.modal.is_open() {
                    return Vec::new();
                }
                self.form.reset();
                self.status.reset_form();
                self.modal = ModalState::Create;
                self.return_focus = return_focus;
                Vec::new()
            }
            Action::OpenEdit { id, return_focus } => {
                if self.modal.is_open() {
                    return Vec::new();
                }
                let Some(message) = self.cache.get(&id) else {
                    log::warn!("Edit requested for message {id} which is no longer listed");
                    return Vec::new();
                };
                self.form.fill(message);
                self.status.reset_form();
                self.modal = ModalState::Edit { id };
                self.return_focus = return_focus;
                Vec::new()
            }
            Action::CloseModal => self.close_modal(),
            Action::Submit => self.submit(),
            Action::RequestDelete(id) => {
                if !self.deleting.contains(&id) {
                    self.confirm_delete = Some(id);
                }
                Vec::new()
            }
            Action::ConfirmDelete => match self.confirm_delete.take() {
                Some(id) if self.deleting.insert(id.clone()) => {
                    vec![Effect::Api(ApiCommand::Delete { id })]
                }
                _ => Vec::new(),
            },
            Action::CancelDelete => {
                self.confirm_delete = None;
                Vec::new()
            }
            Action::Tick => {
                self.status.tick(now);
                Vec::new()
            }
        }
    }

    pub fn apply_event(&mut self, event: ApiEvent, now: Instant) -> Vec<Effect> {
        match event {
            ApiEvent::Listed(result) => {
                self.loading = false;
                match result {
                    Ok(messages) => {
                        self.load_failed = false;
                        self.cache.replace(messages);
                        self.refresh_counts();
                        self.status.release_persistent();
                    }
                    Err(err) => {
                        self.load_failed = true;
                        self.refresh_counts();
                        self.status.set_list(
                            format!("Could not load messages ({err})."),
                            StatusKind::Error,
                            false,
                            now,
                        );
                    }
                }
                if std::mem::take(&mut self.refetch_queued) {
                    return self.start_fetch(false, now);
                }
                Vec::new()
            }
            ApiEvent::Created(result) => {
                self.finish_write(result, "Message sent successfully.", now)
            }
            ApiEvent::Updated { id, result } => {
                log::debug!("Update of message {id} settled");
                self.finish_write(result, "Message updated successfully.", now)
            }
            ApiEvent::Deleted { id, result } => {
                self.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        self.cache.remove_by_id(&id);
                        self.refresh_counts();
                        self.status
                            .set_list("Message deleted.", StatusKind::Success, false, now);
                    }
                    Err(err) => self.status.set_list(
                        format!("Could not delete ({err})."),
                        StatusKind::Error,
                        false,
                        now,
                    ),
                }
                Vec::new()
            }
        }
    }

    /// The filtered view of the cache, in cache order.
    pub fn visible(&self) -> Vec<&Message> {
        filter::apply(self.cache.all(), &self.filter_query)
    }

    /// What to show instead of the list, if anything.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.load_failed {
            Some(EmptyState::LoadFailed)
        } else if self.loading && self.cache.is_empty() {
            None
        } else if self.cache.is_empty() {
            Some(EmptyState::NoMessages)
        } else if self.visible().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// True while something will change without user input.
    pub fn is_busy(&self) -> bool {
        self.loading
            || self.pending_write.is_some()
            || !self.deleting.is_empty()
            || self.status.next_deadline().is_some()
    }

    fn start_fetch(&mut self, announce: bool, now: Instant) -> Vec<Effect> {
        if self.loading {
            self.refetch_queued = true;
            return Vec::new();
        }
        self.loading = true;
        if announce {
            self.status
                .set_list("Loading messages...", StatusKind::Info, true, now);
        }
        vec![Effect::Api(ApiCommand::FetchAll)]
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.modal.is_open() || self.pending_write.is_some() {
            return Vec::new();
        }
        if self.form.fields.has_blank_field() {
            self.status
                .set_form("Please fill in every field.", StatusKind::Error);
            return Vec::new();
        }

        let draft = self.form.fields.clone();
        let command = match self.modal.editing_id() {
            Some(id) => ApiCommand::Update {
                id: id.to_string(),
                draft,
            },
            None => ApiCommand::Create(draft),
        };
        self.form.set_disabled(true);
        self.pending_write = Some(self.modal.clone());
        self.status
            .set_form("Sending data to the server...", StatusKind::Info);
        vec![Effect::Api(command)]
    }

    fn finish_write(
        &mut self,
        result: Result<WriteAck, ApiError>,
        success: &str,
        now: Instant,
    ) -> Vec<Effect> {
        let origin = self.pending_write.take();
        self.form.set_disabled(false);

        match result {
            Ok(_) => {
                let mut effects = Vec::new();
                if origin.as_ref() == Some(&self.modal) {
                    effects.extend(self.close_modal());
                }
                self.status
                    .set_list(success, StatusKind::Success, false, now);
                effects.extend(self.start_fetch(false, now));
                effects
            }
            Err(err) => {
                let text = format!("Could not send ({err}). Check the log for details.");
                if self.modal.is_open() {
                    self.status.set_form(text, StatusKind::Error);
                } else {
                    self.status.set_list(text, StatusKind::Error, false, now);
                }
                Vec::new()
            }
        }
    }

    fn close_modal(&mut self) -> Vec<Effect> {
        if !self.modal.is_open() {
            return Vec::new();
        }
        self.modal = ModalState::Closed;
        self.form.reset();
        self.status.reset_form();
        self.return_focus
            .take()
            .map(Effect::RestoreFocus)
            .into_iter()
            .collect()
    }

    fn refresh_counts(&mut self) {
        // A failed load hides the list, so nothing counts as displayed.
        let displayed = if self.load_failed {
            0
        } else {
            self.visible().len()
        };
        self.status.record_counts(
            displayed,
            self.cache.len(),
            filter::is_active(&self.filter_query),
        );
    }
}
