//! Per-conversation transient state between the URL message and the
//! quality button press.
//!
//! One pending selection per chat, replaced whenever the same chat sends
//! a new URL and consumed by the callback that picks a quality. Nothing
//! is persisted; a process restart empties the store, which the callback
//! path surfaces as a missing-selection condition.

use std::collections::HashMap;
use teloxide::types::ChatId;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::links::Request;

/// One selection waiting for its quality button press.
#[derive(Debug, Clone)]
pub struct PendingSelection {
    pub request: Request,
    pub created_at: Instant,
}

/// Keyed store of pending selections.
#[derive(Default)]
pub struct SessionStore {
    pending: Mutex<HashMap<ChatId, PendingSelection>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a selection for the chat, replacing any previous one.
    pub async fn put(&self, chat: ChatId, request: Request) {
        let mut pending = self.pending.lock().await;
        pending.insert(
            chat,
            PendingSelection {
                request,
                created_at: Instant::now(),
            },
        );
    }

    /// Removes and returns the chat's pending selection, if any.
    pub async fn take(&self, chat: ChatId) -> Option<PendingSelection> {
        let mut pending = self.pending.lock().await;
        pending.remove(&chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::classify;

    #[tokio::test]
    async fn test_take_consumes_selection() {
        let store = SessionStore::new();
        let chat = ChatId(42);
        store.put(chat, classify("https://youtu.be/abc").unwrap()).await;

        assert!(store.take(chat).await.is_some());
        assert!(store.take(chat).await.is_none());
    }

    #[tokio::test]
    async fn test_new_url_replaces_pending_selection() {
        let store = SessionStore::new();
        let chat = ChatId(42);
        store.put(chat, classify("https://youtu.be/first").unwrap()).await;
        store.put(chat, classify("https://youtu.be/second").unwrap()).await;

        let pending = store.take(chat).await.unwrap();
        assert_eq!(pending.request.url.as_str(), "https://www.youtube.com/watch?v=second");
    }

    #[tokio::test]
    async fn test_chats_are_independent() {
        let store = SessionStore::new();
        store.put(ChatId(1), classify("https://youtu.be/one").unwrap()).await;

        assert!(store.take(ChatId(2)).await.is_none());
        assert!(store.take(ChatId(1)).await.is_some());
    }
}
