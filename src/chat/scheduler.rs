//! Delayed bot replies.
//!
//! Each submission spawns a detached timer task that sleeps for the reply
//! delay and then posts the canned reply on a channel. The UI loop drains the
//! channel and routes every event to the panel it names. Timers are never
//! cancelled; with equal delays they fire in submission order.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use super::controller::ChatPanel;
use super::responder::{classify, generate_reply};

/// A bot reply ready to be appended to `panel`'s conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEvent {
    pub panel: ChatPanel,
    pub text: &'static str,
}

/// Spawns reply timers that report back on a single channel.
#[derive(Debug, Clone)]
pub struct ReplyScheduler {
    tx: mpsc::UnboundedSender<ReplyEvent>,
    delay: Duration,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ReplyEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, delay }, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the reply to `user_text` for `panel`. Must be called inside a
    /// tokio runtime.
    pub fn schedule(&self, panel: ChatPanel, user_text: &str) {
        let topic = classify(user_text);
        debug!(
            panel = panel.name(),
            topic = topic.map_or("fallback", |t| t.tag()),
            "scheduling reply"
        );
        let text = generate_reply(user_text);
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI has exited.
            let _ = tx.send(ReplyEvent { panel, text });
        });
    }
}
