use std::time::{Duration, Instant};

/// How long a transient list message stays before the summary comes back.
pub const TRANSIENT_DELAY: Duration = Duration::from_secs(4);

const FORM_PROMPT: &str = "Fill in the fields and click send.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Muted,
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hold {
    Summary,
    Transient { until: Instant },
    Persistent,
}

/// Status lines for the form and the list.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    form: Status,
    list: Status,
    hold: Hold,
    displayed: usize,
    total: usize,
    filter_active: bool,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter {
    pub fn new() -> Self {
        Self {
            form: Status::new(FORM_PROMPT, StatusKind::Muted),
            list: Status::new(summary_text(0, 0, false), StatusKind::Muted),
            hold: Hold::Summary,
            displayed: 0,
            total: 0,
            filter_active: false,
        }
    }

    pub fn form(&self) -> &Status {
        &self.form
    }

    pub fn list(&self) -> &Status {
        &self.list
    }

    pub fn set_form(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.form = Status::new(text, kind);
    }

    pub fn reset_form(&mut self) {
        self.form = Status::new(FORM_PROMPT, StatusKind::Muted);
    }

    /// Shows a list message. Transient ones replace any pending revert.
    pub fn set_list(
        &mut self,
        text: impl Into<String>,
        kind: StatusKind,
        persistent: bool,
        now: Instant,
    ) {
        self.list = Status::new(text, kind);
        self.hold = if persistent {
            Hold::Persistent
        } else {
            Hold::Transient {
                until: now + TRANSIENT_DELAY,
            }
        };
    }

    /// Ends a persistent message such as the loading indicator.
    pub fn release_persistent(&mut self) {
        if self.hold == Hold::Persistent {
            self.show_summary();
        }
    }

    /// Stores the latest counts; the visible line only changes when the summary is showing.
    pub fn record_counts(&mut self, displayed: usize, total: usize, filter_active: bool) {
        self.displayed = displayed;
        self.total = total;
        self.filter_active = filter_active;
        if self.hold == Hold::Summary {
            self.show_summary();
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Hold::Transient { until } = self.hold {
            if now >= until {
                self.show_summary();
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.hold {
            Hold::Transient { until } => Some(until),
            _ => None,
        }
    }

    fn show_summary(&mut self) {
        self.hold = Hold::Summary;
        self.list = Status::new(
            summary_text(self.displayed, self.total, self.filter_active),
            StatusKind::Muted,
        );
    }
}

pub fn summary_text(displayed: usize, total: usize, filter_active: bool) -> String {
    if filter_active {
        format!("Showing {displayed} of {total} messages (filter active).")
    } else {
        format!("Showing {displayed} of {total} messages.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_message_reverts_to_recomputed_summary() {
        let start = Instant::now();
        let mut status = StatusReporter::new();
        status.record_counts(3, 3, false);

        status.set_list("Message deleted.", StatusKind::Success, false, start);
        status.record_counts(1, 2, true);
        assert_eq!(status.list().text, "Message deleted.");

        status.tick(start + TRANSIENT_DELAY);
        assert_eq!(
            status.list().text,
            "Showing 1 of 2 messages (filter active)."
        );
        assert_eq!(status.list().kind, StatusKind::Muted);
    }

    #[test]
    fn new_transient_cancels_pending_revert() {
        let start = Instant::now();
        let mut status = StatusReporter::new();

        status.set_list("first", StatusKind::Info, false, start);
        let later = start + Duration::from_secs(3);
        status.set_list("second", StatusKind::Error, false, later);

        status.tick(start + TRANSIENT_DELAY);
        assert_eq!(status.list().text, "second");
        assert_eq!(status.next_deadline(), Some(later + TRANSIENT_DELAY));
    }

    #[test]
    fn persistent_message_survives_ticks_until_released() {
        let start = Instant::now();
        let mut status = StatusReporter::new();

        status.set_list("Loading messages...", StatusKind::Info, true, start);
        status.tick(start + Duration::from_secs(60));
        assert_eq!(status.list().text, "Loading messages...");

        status.record_counts(2, 2, false);
        status.release_persistent();
        assert_eq!(status.list().text, "Showing 2 of 2 messages.");
    }

    #[test]
    fn release_leaves_transient_alone() {
        let start = Instant::now();
        let mut status = StatusReporter::new();
        status.set_list("Message sent successfully.", StatusKind::Success, false, start);

        status.release_persistent();

        assert_eq!(status.list().text, "Message sent successfully.");
    }
}
