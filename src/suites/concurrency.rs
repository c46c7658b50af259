//! Threads, locks, channels and atomics.
//!
//! Every example owns its synchronization state; nothing here is shared
//! between examples.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Barrier, Mutex, RwLock};
use std::thread;
use std::time::{Duration, Instant};

use crate::harness::{Example, ExampleError, ExpectedPanic};
use crate::{check, check_eq, expect_failure};

pub const EXAMPLES: &[Example] = &[
    Example::new("test_thread_counter", test_thread_counter),
    Example::new("test_scoped_threads", test_scoped_threads),
    Example::new("test_join_handle_result", test_join_handle_result),
    Example::new("test_channel_as_promise", test_channel_as_promise),
    Example::new("test_barrier", test_barrier),
    Example::new("test_atomics", test_atomics),
    Example::new("test_rwlock", test_rwlock),
    Example::new("test_mutex_poisoning", test_mutex_poisoning),
    Example::new("test_durations", test_durations),
];

fn bump_after(counter: &Mutex<u32>, delay: Duration) {
    thread::sleep(delay);
    let mut guard = counter.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard += 1;
}

fn test_thread_counter() -> Result<(), ExampleError> {
    let counter = Arc::new(Mutex::new(0));
    let mut handles = Vec::new();

    for delay in [30, 20] {
        let shared = Arc::clone(&counter);
        handles.push(thread::spawn(move || {
            bump_after(&shared, Duration::from_millis(delay))
        }));
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_| ExampleError::other("counter thread panicked"))?;
    }
    let total = *counter
        .lock()
        .map_err(|e| ExampleError::other(e.to_string()))?;
    check_eq!(total, 2);
    Ok(())
}

fn test_scoped_threads() -> Result<(), ExampleError> {
    let data = vec![1, 2, 3, 4, 5, 6];
    let (left, right) = data.split_at(3);

    // scoped threads may borrow from the enclosing stack frame
    let (a, b) = thread::scope(|s| {
        let a = s.spawn(|| left.iter().sum::<i32>());
        let b = s.spawn(|| right.iter().sum::<i32>());
        (a.join(), b.join())
    });
    let (a, b) = (
        a.map_err(|_| ExampleError::other("left half panicked"))?,
        b.map_err(|_| ExampleError::other("right half panicked"))?,
    );
    check_eq!(a, 6);
    check_eq!(b, 15);
    check_eq!(data.len(), 6);
    Ok(())
}

fn test_join_handle_result() -> Result<(), ExampleError> {
    let handle = thread::spawn(|| (1..=10).product::<u64>());
    let value = handle
        .join()
        .map_err(|_| ExampleError::other("worker panicked"))?;
    check_eq!(value, 3_628_800);

    let failing = thread::spawn(|| -> u8 {
        let _quiet = ExpectedPanic::enter();
        panic!("worker gave up")
    });
    check!(failing.join().is_err());
    Ok(())
}

fn test_channel_as_promise() -> Result<(), ExampleError> {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    let (promise, future) = mpsc::channel();

    let worker = thread::spawn(move || {
        let sum: i32 = numbers.iter().sum();
        // the receiver may already be gone; nothing to do then
        let _ = promise.send(sum);
    });

    let sum = future
        .recv_timeout(Duration::from_secs(5))
        .map_err(ExampleError::other)?;
    check_eq!(sum, 21);
    worker
        .join()
        .map_err(|_| ExampleError::other("accumulator panicked"))?;

    // once every sender is dropped, receiving fails
    expect_failure!(|| future.recv());
    Ok(())
}

fn test_barrier() -> Result<(), ExampleError> {
    let barrier = Arc::new(Barrier::new(3));
    let arrived = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let arrived = Arc::clone(&arrived);
            thread::spawn(move || {
                arrived.fetch_add(1, Ordering::SeqCst);
                barrier.wait();
                // everyone has arrived by the time anyone passes the barrier
                arrived.load(Ordering::SeqCst)
            })
        })
        .collect();

    for handle in handles {
        let seen = handle
            .join()
            .map_err(|_| ExampleError::other("barrier thread panicked"))?;
        check_eq!(seen, 3);
    }
    Ok(())
}

fn test_atomics() -> Result<(), ExampleError> {
    let hits = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                for _ in 0..250 {
                    hits.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .map_err(|_| ExampleError::other("atomic worker panicked"))?;
    }
    check_eq!(hits.load(Ordering::SeqCst), 1000);

    let flag = AtomicUsize::new(5);
    check_eq!(flag.compare_exchange(5, 6, Ordering::SeqCst, Ordering::SeqCst), Ok(5));
    check_eq!(flag.compare_exchange(5, 7, Ordering::SeqCst, Ordering::SeqCst), Err(6));
    Ok(())
}

fn test_rwlock() -> Result<(), ExampleError> {
    let lock = RwLock::new(vec![1]);
    {
        let r1 = lock.read().map_err(|e| ExampleError::other(e.to_string()))?;
        let r2 = lock.read().map_err(|e| ExampleError::other(e.to_string()))?;
        check_eq!(r1.len() + r2.len(), 2);
        check!(lock.try_write().is_err());
    }
    lock.write()
        .map_err(|e| ExampleError::other(e.to_string()))?
        .push(2);
    check_eq!(
        *lock.read().map_err(|e| ExampleError::other(e.to_string()))?,
        vec![1, 2]
    );
    Ok(())
}

fn test_mutex_poisoning() -> Result<(), ExampleError> {
    let shared = Arc::new(Mutex::new(0));
    let clone = Arc::clone(&shared);
    let crashed = thread::spawn(move || {
        let _quiet = ExpectedPanic::enter();
        let _guard = clone.lock();
        panic!("panicking while holding the lock");
    })
    .join();
    check!(crashed.is_err());
    check!(shared.is_poisoned());

    expect_failure!(|| shared.lock().map(|_| ()));
    // the data is still reachable through the poison error
    let value = shared
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    check_eq!(*value, 0);
    Ok(())
}

fn test_durations() -> Result<(), ExampleError> {
    let start = Instant::now();
    thread::sleep(Duration::from_millis(10));
    let elapsed = start.elapsed();
    check!(elapsed >= Duration::from_millis(10));

    let d = Duration::from_secs(1) + Duration::from_millis(500);
    check_eq!(d.as_millis(), 1500);
    check_eq!(d.as_secs_f64(), 1.5);
    check!(Duration::from_secs(1).checked_sub(d).is_none());
    Ok(())
}
