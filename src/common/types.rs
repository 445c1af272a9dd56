use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type MessageId = String;

/// A contact message as stored by the backend.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: Option<MessageId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "No name"
        } else {
            &self.name
        }
    }

    pub fn display_email(&self) -> &str {
        if self.email.trim().is_empty() {
            "No email"
        } else {
            &self.email
        }
    }

    pub fn display_date(&self) -> String {
        match self.created_at {
            Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            None => "No date".to_string(),
        }
    }

    pub fn draft(&self) -> MessageDraft {
        MessageDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageDraft {
    pub fn has_blank_field(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

/// Acknowledgement returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WriteAck {
    #[serde(default)]
    pub id: Option<MessageId>,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts an RFC 3339 string or epoch seconds; anything else becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|at| at.with_timezone(&Utc)),
        serde_json::Value::Number(number) => number.as_f64().and_then(|seconds| {
            let whole = seconds.floor();
            let nanos = ((seconds - whole) * 1e9) as u32;
            Utc.timestamp_opt(whole as i64, nanos).single()
        }),
        _ => None,
    })
}
