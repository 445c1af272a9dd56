use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::transport::MessagesApi;

/// Background task turning UI commands into HTTP calls.
pub struct ApiClient {
    api: MessagesApi,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl ApiClient {
    pub fn new(
        api: MessagesApi,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            api,
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("API client started for {}", self.api.endpoint());

        // Each request runs on its own task so deletes on different rows don't queue.
        while let Some(command) = self.command_receiver.recv().await {
            let api = self.api.clone();
            let sender = self.event_sender.clone();
            tokio::spawn(async move {
                let event = execute(&api, command).await;
                if let Err(err) = sender.send(event).await {
                    log::warn!("Failed to notify UI about settled request: {err}");
                }
            });
        }

        log::info!("Command channel closed; API client stopped");
    }
}

pub async fn execute(api: &MessagesApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchAll => {
            let result = api.list().await;
            match &result {
                Ok(messages) => log::debug!("Fetched {} messages", messages.len()),
                Err(err) => log::error!("Failed to fetch messages: {err:?}"),
            }
            ApiEvent::Listed(result)
        }
        ApiCommand::Create(draft) => {
            let result = api.create(&draft).await;
            match &result {
                Ok(ack) => log::info!("Created message {:?}", ack.id),
                Err(err) => log::error!("Failed to send message to the backend: {err:?}"),
            }
            ApiEvent::Created(result)
        }
        ApiCommand::Update { id, draft } => {
            let result = api.update(&id, &draft).await;
            match &result {
                Ok(_) => log::info!("Updated message {id}"),
                Err(err) => log::error!("Failed to update message {id}: {err:?}"),
            }
            ApiEvent::Updated { id, result }
        }
        ApiCommand::Delete { id } => {
            let result = api.delete(&id).await;
            match &result {
                Ok(()) => log::info!("Deleted message {id}"),
                Err(err) => log::error!("Failed to delete message {id}: {err:?}"),
            }
            ApiEvent::Deleted { id, result }
        }
    }
}
