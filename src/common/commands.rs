use super::types::{MessageDraft, MessageId};

/// Requests the UI hands to the network task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    FetchAll,
    Create(MessageDraft),
    Update { id: MessageId, draft: MessageDraft },
    Delete { id: MessageId },
}
