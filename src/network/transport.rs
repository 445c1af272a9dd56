use reqwest::{Client, Response, Url};

use crate::common::{ApiError, Message, MessageDraft, WriteAck};

/// HTTP access to the `/api/messages` collection. One call, one request; no retries.
#[derive(Debug, Clone)]
pub struct MessagesApi {
    http: Client,
    endpoint: Url,
}

impl MessagesApi {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn list(&self) -> Result<Vec<Message>, ApiError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let body = success_body(response).await?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Malformed(err.to_string()))
    }

    pub async fn create(&self, draft: &MessageDraft) -> Result<WriteAck, ApiError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(draft)
            .send()
            .await?;
        parse_ack(&success_body(response).await?)
    }

    pub async fn update(&self, id: &str, draft: &MessageDraft) -> Result<WriteAck, ApiError> {
        let response = self.http.put(self.item_url(id)?).json(draft).send().await?;
        parse_ack(&success_body(response).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.item_url(id)?).send().await?;
        success_body(response).await.map(|_| ())
    }

    fn item_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport(format!("cannot address {id} under {}", self.endpoint)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

async fn success_body(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    Ok(response.bytes().await?.to_vec())
}

fn parse_ack(body: &[u8]) -> Result<WriteAck, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(WriteAck::default());
    }
    serde_json::from_slice(body).map_err(|err| ApiError::Malformed(err.to_string()))
}
