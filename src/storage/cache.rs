use crate::common::Message;

/// Last successful full read of the message collection.
#[derive(Debug, Default, Clone)]
pub struct MessageCache {
    messages: Vec<Message>,
}

impl MessageCache {
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Drops every entry carrying `id`; absent ids are a no-op.
    pub fn remove_by_id(&mut self, id: &str) {
        self.messages
            .retain(|message| message.id.as_deref() != Some(id));
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages
            .iter()
            .find(|message| message.id.as_deref() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_id(id: &str) -> Message {
        Message {
            id: Some(id.to_string()),
            name: format!("user {id}"),
            ..Message::default()
        }
    }

    #[test]
    fn remove_by_id_drops_exactly_one_entry() {
        let mut cache = MessageCache::default();
        cache.replace(vec![with_id("1"), with_id("2"), with_id("3")]);

        cache.remove_by_id("2");

        assert_eq!(cache.len(), 2);
        assert!(cache.get("2").is_none());
        assert_eq!(cache.all()[0].id.as_deref(), Some("1"));
        assert_eq!(cache.all()[1].id.as_deref(), Some("3"));
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut cache = MessageCache::default();
        cache.replace(vec![with_id("1"), Message::default()]);

        cache.remove_by_id("42");

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn replace_overwrites_everything() {
        let mut cache = MessageCache::default();
        cache.replace(vec![with_id("1"), with_id("2")]);
        cache.replace(vec![with_id("9")]);

        assert_eq!(cache.len(), 1);
        assert!(cache.get("9").is_some());
    }
}
