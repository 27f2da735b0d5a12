//! Combine-latest over three fallible streams.
//!
//! Holds the last value seen on each slot. Every upstream value produces one
//! combined output once all three slots are populated; nothing is produced
//! before that. The first upstream error is forwarded and ends the stream.
//!
//! Completion:
//! - an upstream that ends before ever emitting ends the combined stream
//! - an upstream that ends after emitting keeps its last value in play
//! - the combined stream ends when all three upstreams have ended

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{BoxStream, Stream, StreamExt};

const SLOT_COUNT: usize = 3;

/// Stream returned by [`combine_latest`].
pub struct CombineLatest<A, B, C, E> {
    first: Slot<A, E>,
    second: Slot<B, E>,
    third: Slot<C, E>,
    /// Slot polled first on the next pass, rotated for fairness
    next_poll: usize,
    terminated: bool,
}

/// Combine three streams into a stream of their latest values.
pub fn combine_latest<A, B, C, E>(
    first: BoxStream<'static, Result<A, E>>,
    second: BoxStream<'static, Result<B, E>>,
    third: BoxStream<'static, Result<C, E>>,
) -> CombineLatest<A, B, C, E> {
    CombineLatest {
        first: Slot::new(first),
        second: Slot::new(second),
        third: Slot::new(third),
        next_poll: 0,
        terminated: false,
    }
}

struct Slot<T, E> {
    stream: Option<BoxStream<'static, Result<T, E>>>,
    latest: Option<T>,
}

enum SlotPoll<E> {
    Updated,
    Failed(E),
    Exhausted,
    Pending,
    Idle,
}

impl<T, E> Slot<T, E> {
    fn new(stream: BoxStream<'static, Result<T, E>>) -> Self {
        Self {
            stream: Some(stream),
            latest: None,
        }
    }

    fn poll(&mut self, cx: &mut Context<'_>) -> SlotPoll<E> {
        let Some(stream) = self.stream.as_mut() else {
            return SlotPoll::Idle;
        };

        match stream.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(value))) => {
                self.latest = Some(value);
                SlotPoll::Updated
            }
            Poll::Ready(Some(Err(err))) => {
                self.stream = None;
                SlotPoll::Failed(err)
            }
            Poll::Ready(None) => {
                self.stream = None;
                SlotPoll::Exhausted
            }
            Poll::Pending => SlotPoll::Pending,
        }
    }

    fn is_finished(&self) -> bool {
        self.stream.is_none()
    }

    fn has_value(&self) -> bool {
        self.latest.is_some()
    }
}

impl<A, B, C, E> CombineLatest<A, B, C, E>
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    fn snapshot(&self) -> Option<(A, B, C)> {
        match (&self.first.latest, &self.second.latest, &self.third.latest) {
            (Some(a), Some(b), Some(c)) => Some((a.clone(), b.clone(), c.clone())),
            _ => None,
        }
    }

    fn poll_slot(&mut self, index: usize, cx: &mut Context<'_>) -> SlotPoll<E> {
        match index {
            0 => self.first.poll(cx),
            1 => self.second.poll(cx),
            _ => self.third.poll(cx),
        }
    }

    fn slot_has_value(&self, index: usize) -> bool {
        match index {
            0 => self.first.has_value(),
            1 => self.second.has_value(),
            _ => self.third.has_value(),
        }
    }

    fn all_finished(&self) -> bool {
        self.first.is_finished() && self.second.is_finished() && self.third.is_finished()
    }
}

// Fields are never pinned structurally; every upstream is a boxed stream.
impl<A, B, C, E> Unpin for CombineLatest<A, B, C, E> {}

impl<A, B, C, E> Stream for CombineLatest<A, B, C, E>
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    type Item = Result<(A, B, C), E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.terminated {
            return Poll::Ready(None);
        }

        loop {
            let mut progressed = false;

            for offset in 0..SLOT_COUNT {
                let index = (this.next_poll + offset) % SLOT_COUNT;
                match this.poll_slot(index, cx) {
                    SlotPoll::Pending | SlotPoll::Idle => {}
                    SlotPoll::Updated => {
                        this.next_poll = (index + 1) % SLOT_COUNT;
                        if let Some(combined) = this.snapshot() {
                            return Poll::Ready(Some(Ok(combined)));
                        }
                        progressed = true;
                        break;
                    }
                    SlotPoll::Failed(err) => {
                        this.terminated = true;
                        return Poll::Ready(Some(Err(err)));
                    }
                    SlotPoll::Exhausted => {
                        if !this.slot_has_value(index) {
                            this.terminated = true;
                            return Poll::Ready(None);
                        }
                        progressed = true;
                    }
                }
            }

            if this.all_finished() {
                this.terminated = true;
                return Poll::Ready(None);
            }

            // Every live upstream returned Pending and registered the waker.
            if !progressed {
                return Poll::Pending;
            }
        }
    }
}
