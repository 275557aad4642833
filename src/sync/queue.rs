//! Blocking FIFO queue
use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::mem;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::errors::{Error, Result};

use super::iter::{Iter, TryIter};

// -----------------------------------------------------------------------------
// 		- Take -
// -----------------------------------------------------------------------------
/// The outcome of [`BlockingQueue::take`].
///
/// A closed queue is not an error: it is the signal for a consumer
/// to stop looping.
///
/// [`BlockingQueue::take`]: struct.BlockingQueue.html#method.take
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Take<T> {
    /// The head of the queue
    Value(T),
    /// The queue was shut down
    Closed,
}

impl<T> Take<T> {
    /// `true` if the queue was shut down
    pub fn is_closed(&self) -> bool {
        match self {
            Take::Closed => true,
            Take::Value(_) => false,
        }
    }

    /// `true` if a value was taken
    pub fn is_value(&self) -> bool {
        !self.is_closed()
    }

    /// Convert into an `Option`, mapping `Closed` to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Take::Value(val) => Some(val),
            Take::Closed => None,
        }
    }
}

impl<T> From<Take<T>> for Option<T> {
    fn from(take: Take<T>) -> Option<T> {
        take.into_option()
    }
}

// -----------------------------------------------------------------------------
// 		- Blocking queue -
// -----------------------------------------------------------------------------
struct State<T> {
    buffer: VecDeque<T>,
    shutdown: bool,
}

/// An unbounded, thread safe FIFO queue.
///
/// Producers call [`add`], which never blocks.
/// Consumers call [`take`], which parks the calling thread until a value
/// is available or the queue is shut down.
///
/// Calling [`shutdown`] closes the queue for good: values still in the queue
/// are dropped, every blocked consumer wakes up with [`Take::Closed`] and
/// any later [`add`] is rejected.
///
/// ```
/// # use std::sync::Arc;
/// # use std::thread;
/// use sonr_queue::sync::queue::{BlockingQueue, Take};
///
/// let queue = Arc::new(BlockingQueue::new());
/// let rx = queue.clone();
///
/// let handle = thread::spawn(move || {
///     let mut received = Vec::new();
///     while let Take::Value(val) = rx.take() {
///         received.push(val);
///         if received.len() == 3 {
///             break
///         }
///     }
///     received
/// });
///
/// queue.add(1).unwrap();
/// queue.add(2).unwrap();
/// queue.add(3).unwrap();
///
/// assert_eq!(handle.join().unwrap(), vec![1, 2, 3]);
/// queue.shutdown();
/// assert_eq!(queue.take(), Take::Closed);
/// ```
///
/// [`add`]: struct.BlockingQueue.html#method.add
/// [`take`]: struct.BlockingQueue.html#method.take
/// [`shutdown`]: struct.BlockingQueue.html#method.shutdown
/// [`Take::Closed`]: enum.Take.html
pub struct BlockingQueue<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` values before
    /// the buffer reallocates.
    /// This does not limit the number of values the queue can hold.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State {
                buffer: VecDeque::with_capacity(capacity),
                shutdown: false,
            }),
            not_empty: Condvar::new(),
        }
    }

    /// Push a value onto the back of the queue and wake one waiting consumer.
    ///
    /// If the queue is shut down the value is dropped and
    /// `Error::ClosedQueue` is returned.
    pub fn add(&self, val: T) -> Result<()> {
        {
            let mut state = self.state.lock();
            if state.shutdown {
                debug!("add on a closed queue, value dropped");
                return Err(Error::ClosedQueue);
            }
            state.buffer.push_back(val);
        }

        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove the value at the front of the queue, blocking until
    /// one is available.
    ///
    /// Returns `Take::Closed` without blocking once the queue is shut down.
    pub fn take(&self) -> Take<T> {
        let mut state = self.state.lock();
        loop {
            if state.shutdown {
                return Take::Closed;
            }

            if let Some(val) = state.buffer.pop_front() {
                return Take::Value(val);
            }

            trace!("queue empty, waiting");
            self.not_empty.wait(&mut state);
        }
    }

    /// Remove the value at the front of the queue without blocking.
    ///
    /// Returns `Error::Empty` if there is nothing to take and
    /// `Error::ClosedQueue` if the queue is shut down.
    pub fn try_take(&self) -> Result<T> {
        let mut state = self.state.lock();
        if state.shutdown {
            return Err(Error::ClosedQueue);
        }
        state.buffer.pop_front().ok_or(Error::Empty)
    }

    /// Same as [`take`] but gives up with `Error::Timeout` once `timeout`
    /// has passed.
    ///
    /// ```
    /// # use std::time::Duration;
    /// # use sonr_queue::sync::queue::BlockingQueue;
    /// # use sonr_queue::errors::Error;
    /// let queue = BlockingQueue::<u8>::new();
    /// let res = queue.take_timeout(Duration::from_millis(10));
    /// assert_eq!(res, Err(Error::Timeout));
    /// ```
    ///
    /// [`take`]: struct.BlockingQueue.html#method.take
    pub fn take_timeout(&self, timeout: Duration) -> Result<T> {
        let deadline = match Instant::now().checked_add(timeout) {
            Some(deadline) => deadline,
            // Too far out to represent, wait without a deadline
            None => return self.take().into_option().ok_or(Error::ClosedQueue),
        };
        let mut state = self.state.lock();
        loop {
            if state.shutdown {
                return Err(Error::ClosedQueue);
            }

            if let Some(val) = state.buffer.pop_front() {
                return Ok(val);
            }

            if self.not_empty.wait_until(&mut state, deadline).timed_out() {
                // Last look: a value or a shutdown may have raced the timeout
                if state.shutdown {
                    return Err(Error::ClosedQueue);
                }
                return state.buffer.pop_front().ok_or(Error::Timeout);
            }
        }
    }

    /// Close the queue.
    ///
    /// Every value still in the queue is dropped and all blocked consumers
    /// return `Take::Closed`. Calling this more than once has no
    /// further effect.
    pub fn shutdown(&self) {
        let discarded = {
            let mut state = self.state.lock();
            if state.shutdown {
                return;
            }
            state.shutdown = true;
            mem::replace(&mut state.buffer, VecDeque::new())
        };

        let woken = self.not_empty.notify_all();
        debug!(
            "queue shut down: {} values discarded, {} consumers woken",
            discarded.len(),
            woken
        );

        // Values are dropped outside the lock
        drop(discarded);
    }

    /// `true` once [`shutdown`] has been called.
    ///
    /// [`shutdown`]: struct.BlockingQueue.html#method.shutdown
    pub fn is_shutdown(&self) -> bool {
        self.state.lock().shutdown
    }

    /// Number of values currently in the queue
    pub fn len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// `true` if the queue currently holds no values
    pub fn is_empty(&self) -> bool {
        self.state.lock().buffer.is_empty()
    }

    /// A blocking iterator that yields values until the queue is shut down.
    ///
    /// ```
    /// # use sonr_queue::sync::queue::BlockingQueue;
    /// let queue = BlockingQueue::new();
    /// queue.add("a").unwrap();
    /// queue.add("b").unwrap();
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next(), Some("b"));
    /// queue.shutdown();
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// An iterator over the values that are in the queue right now.
    /// Never blocks.
    pub fn try_iter(&self) -> TryIter<'_, T> {
        TryIter::new(self)
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BlockingQueue")
            .field("len", &state.buffer.len())
            .field("shutdown", &state.shutdown)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a BlockingQueue<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
