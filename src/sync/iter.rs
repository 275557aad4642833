//! Consuming iterators over a `BlockingQueue`
use std::iter::FusedIterator;

use super::queue::{BlockingQueue, Take};

// -----------------------------------------------------------------------------
// 		- Blocking iterator -
// -----------------------------------------------------------------------------
/// Blocks on every call to `next` until a value arrives.
/// Ends once the queue is shut down.
///
/// Created by [`BlockingQueue::iter`].
///
/// [`BlockingQueue::iter`]: ../queue/struct.BlockingQueue.html#method.iter
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a BlockingQueue<T>,
    closed: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(queue: &'a BlockingQueue<T>) -> Self {
        Self {
            queue,
            closed: false,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.closed {
            return None;
        }

        match self.queue.take() {
            Take::Value(val) => Some(val),
            Take::Closed => {
                self.closed = true;
                None
            }
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// -----------------------------------------------------------------------------
// 		- Non-blocking iterator -
// -----------------------------------------------------------------------------
/// Yields the values available in the queue without blocking.
///
/// Created by [`BlockingQueue::try_iter`].
///
/// [`BlockingQueue::try_iter`]: ../queue/struct.BlockingQueue.html#method.try_iter
#[derive(Debug)]
pub struct TryIter<'a, T> {
    queue: &'a BlockingQueue<T>,
}

impl<'a, T> TryIter<'a, T> {
    pub(crate) fn new(queue: &'a BlockingQueue<T>) -> Self {
        Self { queue }
    }
}

impl<'a, T> Iterator for TryIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.try_take().ok()
    }
}
