use super::commands::ApiCommand;
use super::error::ApiError;
use super::types::{Message, MessageId, WriteAck};

/// Settled requests reported back to the UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    Listed(Result<Vec<Message>, ApiError>),
    Created(Result<WriteAck, ApiError>),
    Updated {
        id: MessageId,
        result: Result<WriteAck, ApiError>,
    },
    Deleted {
        id: MessageId,
        result: Result<(), ApiError>,
    },
}

impl ApiEvent {
    /// The event a command settles with when it fails before reaching the server.
    pub fn failed(command: ApiCommand, error: ApiError) -> Self {
        match command {
            ApiCommand::FetchAll => ApiEvent::Listed(Err(error)),
            ApiCommand::Create(_) => ApiEvent::Created(Err(error)),
            ApiCommand::Update { id, .. } => ApiEvent::Updated {
                id,
                result: Err(error),
            },
            ApiCommand::Delete { id } => ApiEvent::Deleted {
                id,
                result: Err(error),
            },
        }
    }
}
