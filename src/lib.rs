#![deny(missing_docs)]
//! # Blocking queue
//!
//! An unbounded FIFO queue for handing values between threads.
//! Producers never block, consumers block until a value arrives
//! and a single `shutdown` call releases every waiting consumer.
//!
//! ```
//! # use std::sync::Arc;
//! # use std::thread;
//! use sonr_queue::BlockingQueue;
//!
//! let queue = Arc::new(BlockingQueue::new());
//!
//! let consumer = {
//!     let queue = queue.clone();
//!     thread::spawn(move || queue.iter().sum::<u32>())
//! };
//!
//! for i in 1..=4 {
//!     queue.add(i).unwrap();
//! }
//!
//! while !queue.is_empty() {
//!     thread::yield_now();
//! }
//! queue.shutdown();
//! assert_eq!(consumer.join().unwrap(), 10);
//! ```
#[macro_use] extern crate log;

pub mod sync;
pub mod errors;

// Pub uses
pub use sync::queue::{BlockingQueue, Take};
pub use errors::{Error, Result};
