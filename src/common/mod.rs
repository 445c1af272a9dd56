pub mod commands;
pub mod error;
pub mod events;
pub mod types;

pub use commands::ApiCommand;
pub use error::ApiError;
pub use events::ApiEvent;
pub use types::{Message, MessageDraft, MessageId, WriteAck};
