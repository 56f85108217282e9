/// Validation tests for the queue.
///
/// These tests verify:
/// 1. **Heap order** - any insertion sequence drains in non-increasing priority
/// 2. **Size accounting** - `len` / `is_empty` track enqueues and dequeues
/// 3. **Purity of peek** - peeking never changes what comes out next
/// 4. **Stress** - large random workloads with a fixed seed
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::demo;
    use crate::pqueue::{BoundedHeap, Entry};
    use crate::QueueError;

    fn priorities_of(entries: &[Entry]) -> Vec<i32> {
        entries.iter().map(|e| e.priority).collect()
    }

    fn sorted_desc(mut v: Vec<i32>) -> Vec<i32> {
        v.sort_unstable_by(|a, b| b.cmp(a));
        v
    }

    #[test]
    fn test_stress_random_drain() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut queue = BoundedHeap::new();
        let mut inserted = Vec::with_capacity(10_000);
        for i in 0..10_000 {
            let p = rng.gen_range(1..=1000);
            inserted.push(p);
            queue.enqueue(p, format!("Task{i}"));
        }
        assert_eq!(queue.len(), 10_000);
        assert!(queue.is_valid_heap());

        let drained = demo::drain(&mut queue).unwrap();
        assert_eq!(drained.len(), 10_000);
        assert_eq!(priorities_of(&drained), sorted_desc(inserted));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_payloads_survive_drain() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut queue = BoundedHeap::new();
        for i in 0..500 {
            queue.enqueue(rng.gen_range(-50..=50), format!("{i}"));
        }
        let mut ids: Vec<usize> = demo::drain(&mut queue)
            .unwrap()
            .into_iter()
            .map(|e| e.payload.parse().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_after_drain_rejects() {
        let mut queue = demo::sample_queue();
        demo::drain(&mut queue).unwrap();
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        assert_eq!(queue.peek(), Err(QueueError::Empty));
        assert_eq!(queue.len(), 0);
        queue.enqueue(1, "again");
        assert_eq!(queue.peek().unwrap(), Entry::new(1, "again"));
    }

    proptest! {
        #[test]
        fn drain_is_non_increasing(
            items in prop::collection::vec((any::<i32>(), ".{0,8}"), 0..256),
        ) {
            let mut queue: BoundedHeap = items.iter().cloned().collect();
            prop_assert!(queue.is_valid_heap());
            let drained = demo::drain(&mut queue).unwrap();
            prop_assert_eq!(drained.len(), items.len());
            let expected = sorted_desc(items.iter().map(|(p, _)| *p).collect());
            prop_assert_eq!(priorities_of(&drained), expected);
        }

        #[test]
        fn len_tracks_operations(n in 0usize..200, k in 0usize..200) {
            let k = k.min(n);
            let mut queue = BoundedHeap::new();
            for i in 0..n {
                queue.enqueue((i % 17) as i32, "x");
            }
            prop_assert_eq!(queue.len(), n);
            for _ in 0..k {
                queue.dequeue().unwrap();
            }
            prop_assert_eq!(queue.len(), n - k);
            prop_assert_eq!(queue.is_empty(), n == k);
        }

        #[test]
        fn peek_matches_next_dequeue(
            items in prop::collection::vec(-100i32..100, 1..128),
        ) {
            let mut queue = BoundedHeap::new();
            for (i, p) in items.iter().enumerate() {
                queue.enqueue(*p, i.to_string());
            }
            while !queue.is_empty() {
                let len = queue.len();
                let first = queue.peek().unwrap();
                prop_assert_eq!(queue.peek().unwrap(), first.clone());
                prop_assert_eq!(queue.len(), len);
                prop_assert_eq!(queue.dequeue().unwrap(), first);
            }
        }

        #[test]
        fn round_trip_single(priority in any::<i32>(), payload in ".*") {
            let mut queue = BoundedHeap::new();
            queue.enqueue(priority, payload.clone());
            prop_assert_eq!(queue.dequeue().unwrap(), Entry::new(priority, payload));
            prop_assert!(queue.is_empty());
        }

        #[test]
        fn interleaved_ops_keep_heap_valid(
            ops in prop::collection::vec(prop::option::of(-20i32..20), 0..300),
        ) {
            let mut queue = BoundedHeap::new();
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                match op {
                    Some(p) => {
                        queue.enqueue(p, "");
                        model.push(p);
                    }
                    None => {
                        let got = queue.dequeue().map(|e| e.priority);
                        let max = model.iter().copied().max();
                        match max {
                            Some(m) => {
                                prop_assert_eq!(got, Ok(m));
                                let pos = model.iter().position(|&x| x == m).unwrap();
                                model.swap_remove(pos);
                            }
                            None => prop_assert_eq!(got, Err(QueueError::Empty)),
                        }
                    }
                }
                prop_assert!(queue.is_valid_heap());
                prop_assert_eq!(queue.len(), model.len());
            }
        }
    }
}
