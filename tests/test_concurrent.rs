use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{unbounded, RecvTimeoutError};
use sonr_queue::sync::queue::{BlockingQueue, Take};

#[test]
fn test_take_blocks_until_add() {
    let queue = Arc::new(BlockingQueue::new());
    let (tx, rx) = unbounded();

    let q = queue.clone();
    let handle = thread::spawn(move || {
        let _ = tx.send(q.take());
    });

    assert_eq!(
        rx.recv_timeout(Duration::from_millis(100)),
        Err(RecvTimeoutError::Timeout)
    );

    queue.add(7).unwrap();
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Take::Value(7)));
    handle.join().unwrap();
}

#[test]
fn test_no_loss_no_duplication() {
    // -----------------------------------------------------------------------------
    // 		- Four producers, four consumers -
    // 		Every value added is received exactly once
    // -----------------------------------------------------------------------------
    let producers = 4u32;
    let per_producer = 2_500u32;
    let total = (producers * per_producer) as usize;

    let queue = BlockingQueue::new();
    let (tx, rx) = unbounded();

    crossbeam::scope(|s| {
        let consumers: Vec<_> = (0..4)
            .map(|_| {
                let queue = &queue;
                let tx = tx.clone();
                s.spawn(move |_| {
                    for val in queue {
                        let _ = tx.send(val);
                    }
                })
            })
            .collect();

        for p in 0..producers {
            let queue = &queue;
            s.spawn(move |_| {
                for i in 0..per_producer {
                    queue.add(p * per_producer + i).unwrap();
                }
            });
        }

        let mut seen = HashMap::new();
        for _ in 0..total {
            let val = rx.recv_timeout(Duration::from_secs(10)).unwrap();
            *seen.entry(val).or_insert(0) += 1;
        }

        queue.shutdown();
        for consumer in consumers {
            consumer.join().unwrap();
        }

        assert_eq!(seen.len(), total);
        assert!(seen.values().all(|&count| count == 1));
        assert!(rx.try_recv().is_err());
    })
    .unwrap();
}

#[test]
fn test_per_producer_order_is_kept() {
    // Each producer's values arrive in the order they were added
    let queue = BlockingQueue::new();
    let per_producer = 1_000usize;

    crossbeam::scope(|s| {
        for p in 0..3usize {
            let queue = &queue;
            s.spawn(move |_| {
                for i in 0..per_producer {
                    queue.add((p, i)).unwrap();
                }
            });
        }

        let mut next = [0usize; 3];
        for _ in 0..3 * per_producer {
            match queue.take() {
                Take::Value((p, i)) => {
                    assert_eq!(i, next[p]);
                    next[p] += 1;
                }
                Take::Closed => panic!("queue closed unexpectedly"),
            }
        }
        assert_eq!(next, [per_producer; 3]);
    })
    .unwrap();
}

#[test]
fn test_consumers_each_get_a_distinct_value() {
    let queue = Arc::new(BlockingQueue::new());
    let (tx, rx) = unbounded();

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let q = queue.clone();
            let tx = tx.clone();
            thread::spawn(move || {
                let _ = tx.send(q.take());
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(20));
    for i in 0..6 {
        queue.add(i).unwrap();
    }

    let mut received: Vec<_> = (0..6)
        .map(|_| {
            rx.recv_timeout(Duration::from_secs(5))
                .unwrap()
                .into_option()
                .unwrap()
        })
        .collect();
    received.sort();
    assert_eq!(received, vec![0, 1, 2, 3, 4, 5]);

    for handle in handles {
        handle.join().unwrap();
    }
}
