//! Assistant widget transcript service.
//!
//! Owns a greeting-seeded, append-only transcript and the deferred reply
//! scheduling: a submitted turn appends the user text immediately and
//! spawns an independent task that appends the FAQ answer after a fixed
//! delay. The delay is a constructor parameter so tests can run with zero
//! delay instead of waiting on wall-clock time.
//!
//! Replies to rapidly submitted turns are deliberately NOT serialized
//! relative to each other -- each is an independent deferred append, so two
//! back-to-back submissions may see their answers land in either order.
//! The tests below assert user-turn ordering and reply presence only.

use std::sync::{Arc, Weak};
use std::time::Duration;

use drunch_types::chat::ChatTurn;
use drunch_types::error::ChatError;
use tokio::sync::Mutex;
use tracing::debug;

use crate::faq;

/// A single assistant session: transcript plus reply delay.
#[derive(Debug, Clone)]
pub struct Assistant {
    transcript: Arc<Mutex<Vec<ChatTurn>>>,
    reply_delay: Duration,
}

impl Assistant {
    /// Open a session with the greeting already in the transcript.
    pub fn new(greeting: &str, reply_delay: Duration) -> Self {
        Self {
            transcript: Arc::new(Mutex::new(vec![ChatTurn::assistant(greeting)])),
            reply_delay,
        }
    }

    /// A copy of the transcript as it stands right now.
    ///
    /// A deferred reply may land at any moment after submission; callers
    /// poll or re-read rather than assuming the reply is present.
    pub async fn transcript(&self) -> Vec<ChatTurn> {
        self.transcript.lock().await.clone()
    }

    /// The canned prompts offered before the first user turn.
    pub fn quick_questions(&self) -> &'static [&'static str] {
        faq::QUICK_QUESTIONS
    }

    /// Submit a user turn.
    ///
    /// Blank or whitespace-only input is rejected and leaves the transcript
    /// untouched. Otherwise the user turn is appended immediately and the
    /// assistant's answer is scheduled after the configured delay. If the
    /// session is dropped before the delay elapses the deferred append is
    /// silently dropped (the task holds only a weak reference).
    pub async fn submit_turn(&self, text: &str) -> Result<(), ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.transcript.lock().await.push(ChatTurn::user(trimmed));

        let reply = faq::respond(trimmed);
        let transcript: Weak<Mutex<Vec<ChatTurn>>> = Arc::downgrade(&self.transcript);
        let delay = self.reply_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(transcript) = transcript.upgrade() else {
                debug!("assistant session dropped before reply, discarding");
                return;
            };
            transcript.lock().await.push(ChatTurn::assistant(reply));
        });

        Ok(())
    }
}
