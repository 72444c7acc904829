use ractor::{ActorRef, Message, MessagingErr};
use std::time::Duration;
use tokio::task::JoinHandle;

/// A single cancellable timer slot for an actor.
///
/// Every restart hands out a new generation number, which the delivered
/// message carries back. Aborting the timer task cannot recall a message that
/// already reached the mailbox, so the actor passes that number to
/// [`TimerSlot::fired`] and drops anything that is not the current timer.
pub struct TimerSlot<TMsg: Message> {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<Result<(), MessagingErr<TMsg>>>>,
}

impl<TMsg: Message> TimerSlot<TMsg> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Restart the timer: cancel anything pending and deliver the message
    /// built by `msg` to `target` once the delay elapses without another
    /// restart. `msg` receives the generation of this timer.
    pub fn restart<F>(&mut self, target: &ActorRef<TMsg>, msg: F)
    where
        F: FnOnce(u64) -> TMsg + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        self.pending = Some(target.send_after(self.delay, move || msg(generation)));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Accept a delivered timer message. Returns false, leaving the slot
    /// untouched, when `generation` belongs to a cancelled or restarted timer.
    pub fn fired(&mut self, generation: u64) -> bool {
        if self.pending.is_none() || generation != self.generation {
            return false;
        }
        self.pending = None;
        true
    }
}

impl<TMsg: Message> Drop for TimerSlot<TMsg> {
    fn drop(&mut self) {
        self.cancel();
    }
}
