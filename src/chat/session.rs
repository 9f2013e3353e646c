use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::chat::message::{ChatLog, ChatMessage, Sender};

/// Delay before the simulated assistant reply lands in the log.
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

/// Owns a chat log and the reply tasks scheduled against it.
///
/// Reply tasks only hold a [`Weak`] handle to the log and are aborted when the
/// session is dropped, so a reply never lands after its owner is gone.
#[derive(Debug)]
pub struct ChatSession {
    log: Arc<Mutex<ChatLog>>,
    replies: Vec<JoinHandle<()>>,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_delay(REPLY_DELAY)
    }

    pub fn with_delay(reply_delay: Duration) -> Self {
        Self {
            log: Arc::new(Mutex::new(ChatLog::seeded())),
            replies: Vec::new(),
            reply_delay,
        }
    }

    /// Append a user message now and schedule the assistant echo.
    ///
    /// Outside a tokio runtime the message is still appended, but no reply is
    /// scheduled.
    pub fn send(&mut self, text: &str) -> ChatMessage {
        let message = ChatMessage::new(text, Sender::User);
        lock(&self.log).push(message.clone());

        self.replies.retain(|handle| !handle.is_finished());
        match Handle::try_current() {
            Ok(runtime) => {
                let log = Arc::downgrade(&self.log);
                let reply = ChatMessage::reply_text(text);
                let delay = self.reply_delay;
                self.replies
                    .push(runtime.spawn(deliver_reply(log, reply, delay)));
            }
            Err(_) => warn!("chat: no async runtime, reply not scheduled"),
        }
        message
    }

    /// Copy of every message in order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.log).messages().to_vec()
    }

    /// Replies scheduled but not yet delivered.
    pub fn pending_replies(&self) -> usize {
        self.replies.iter().filter(|h| !h.is_finished()).count()
    }

    /// Shared handle to the log, for observers that outlive a single call.
    pub fn log_handle(&self) -> Arc<Mutex<ChatLog>> {
        Arc::clone(&self.log)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        for handle in self.replies.drain(..) {
            handle.abort();
        }
    }
}

async fn deliver_reply(log: Weak<Mutex<ChatLog>>, text: String, delay: Duration) {
    tokio::time::sleep(delay).await;
    match log.upgrade() {
        Some(log) => lock(&log).push(ChatMessage::new(text, Sender::Assistant)),
        None => debug!("chat: log dropped before reply"),
    }
}

fn lock(log: &Mutex<ChatLog>) -> MutexGuard<'_, ChatLog> {
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
