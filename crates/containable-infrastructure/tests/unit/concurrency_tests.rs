//! Concurrency Tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use containable_domain::Error;
use containable_infrastructure::container::Container;

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn test_concurrent_registration_loses_nothing() {
    let container = Arc::new(Container::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let container = Arc::clone(&container);
            thread::spawn(move || {
                for index in 0..PER_THREAD {
                    container
                        .register(format!("t{thread_id}.k{index}"), index)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(container.len().unwrap(), THREADS * PER_THREAD);
}

#[test]
fn test_concurrent_duplicate_registration_has_one_winner() {
    let container = Arc::new(Container::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let container = Arc::clone(&container);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                container.register("contested", thread_id)
            })
        })
        .collect();

    let outcomes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().err())
            .all(|error| matches!(error, Error::DuplicateKey { .. }))
    );
}

#[test]
fn test_concurrent_cached_resolution_converges() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let container = Arc::new(Container::new());
    container
        .register_fn("shared", move || counter.fetch_add(1, Ordering::SeqCst))
        .unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let container = Arc::clone(&container);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                container.resolve("shared").unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let settled = container.resolve_as::<usize>("shared").unwrap();
    let again = container.resolve_as::<usize>("shared").unwrap();
    assert!(Arc::ptr_eq(&settled, &again));
    assert!(calls.load(Ordering::SeqCst) >= 1);
}

#[test]
fn test_freeze_is_observed_by_all_threads() {
    let container = Arc::new(Container::new());
    container.register("before", 1_i32).unwrap();
    container.freeze().unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let container = Arc::clone(&container);
            thread::spawn(move || {
                let write = container.register(format!("late{thread_id}"), thread_id);
                let read = container.resolve_as::<i32>("before").map(|value| *value);
                (write, read)
            })
        })
        .collect();

    for handle in handles {
        let (write, read) = handle.join().unwrap();
        assert!(matches!(write, Err(Error::FrozenRegistry)));
        assert_eq!(read.unwrap(), 1);
    }
}

#[test]
fn test_namespace_block_does_not_leak_into_other_threads() {
    let container = Arc::new(Container::new());
    let inside = Arc::new(Barrier::new(2));
    let registered = Arc::new(Barrier::new(2));

    let worker = {
        let container = Arc::clone(&container);
        let inside = Arc::clone(&inside);
        let registered = Arc::clone(&registered);
        thread::spawn(move || {
            container.namespace("a", |a| {
                inside.wait();
                registered.wait();
                a.register("inner", 1_i32)
            })
        })
    };

    inside.wait();
    container.register("top", 2_i32).unwrap();
    registered.wait();
    worker.join().unwrap().unwrap();

    assert!(container.contains_key("top").unwrap());
    assert!(container.contains_key("a.inner").unwrap());
    assert!(!container.contains_key("a.top").unwrap());
}

#[test]
fn test_parallel_namespace_blocks_keep_their_own_paths() {
    let container = Arc::new(Container::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let container = Arc::clone(&container);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                container.namespace(format!("ns{thread_id}"), |outer| {
                    barrier.wait();
                    outer.namespace("inner", |inner| {
                        for index in 0..PER_THREAD {
                            inner.register(format!("k{index}"), index)?;
                        }
                        Ok(())
                    })
                })
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(container.len().unwrap(), THREADS * PER_THREAD);
    for thread_id in 0..THREADS {
        for index in 0..PER_THREAD {
            let key = format!("ns{thread_id}.inner.k{index}");
            assert_eq!(*container.resolve_as::<usize>(key).unwrap(), index);
        }
    }
}

#[test]
fn test_panicking_namespace_block_leaves_no_prefix() {
    let container = Arc::new(Container::new());

    let worker = {
        let container = Arc::clone(&container);
        thread::spawn(move || {
            container.namespace("broken", |_| -> containable_domain::Result<()> {
                panic!("block failed")
            })
        })
    };
    assert!(worker.join().is_err());

    container.register("after", 1_i32).unwrap();

    assert_eq!(container.keys().unwrap(), vec!["after".to_string()]);
}

#[test]
fn test_restore_never_exposes_stale_entries() {
    let container = Arc::new(Container::new());
    container.register("base", "live").unwrap();
    container.stub_value("base", "stubbed").unwrap();
    container.register("late", "real").unwrap();
    container.stub_value("late", "stubbed").unwrap();

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let container = Arc::clone(&container);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    match container.resolve_as::<&str>("late") {
                        Ok(value) => assert_eq!(*value, "stubbed"),
                        Err(error) => assert!(matches!(error, Error::UnknownKey { .. })),
                    }
                }
            })
        })
        .collect();

    container.restore().unwrap();

    for reader in readers {
        reader.join().unwrap();
    }
    assert!(!container.contains_key("late").unwrap());
    assert_eq!(*container.resolve_as::<&str>("base").unwrap(), "live");
}
