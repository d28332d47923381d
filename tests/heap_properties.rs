use grid_heap::{shortest_path, Grid, HeapEntry, MinHeap, Point, SearchOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn is_heap_ordered<T>(heap: &MinHeap<T>) -> bool {
    let priorities: Vec<f64> = heap.iter().map(|entry| entry.priority).collect();
    (1..priorities.len()).all(|index| priorities[index] >= priorities[(index - 1) / 2])
}

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

#[test]
fn random_operations_preserve_heap_order_and_size() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let mut heap: MinHeap<u32> = MinHeap::new();
        let mut model: Vec<(f64, u32)> = Vec::new();
        let mut next_id = 0u32;

        for _ in 0..200 {
            let before = heap.len();
            match rng.gen_range(0..4) {
                0 | 1 => {
                    let priority = f64::from(rng.gen_range(0..20u32));
                    heap.add((priority, next_id));
                    model.push((priority, next_id));
                    next_id += 1;
                    assert_eq!(heap.len(), before + 1);
                }
                2 => {
                    let popped = heap.pop();
                    match popped {
                        Some(entry) => {
                            let min = model.iter().map(|(p, _)| *p).fold(f64::INFINITY, f64::min);
                            assert_eq!(entry.priority, min);
                            let at = model.iter().position(|(_, id)| *id == entry.value).unwrap();
                            model.swap_remove(at);
                            assert_eq!(heap.len(), before - 1);
                        }
                        None => assert!(model.is_empty()),
                    }
                }
                _ => {
                    let id = rng.gen_range(0..next_id.max(1));
                    let present = model.iter().position(|(_, v)| *v == id);
                    assert_eq!(heap.includes(&id), present.is_some());
                    assert_eq!(heap.remove(&id), present.is_some());
                    match present {
                        Some(at) => {
                            model.swap_remove(at);
                            assert!(!heap.includes(&id));
                            assert_eq!(heap.len(), before - 1);
                        }
                        None => assert_eq!(heap.len(), before),
                    }
                }
            }
            assert!(is_heap_ordered(&heap));
            assert_eq!(heap.len(), model.len());
        }
    }
}

#[test]
fn pops_are_monotonic_and_exhaustive() {
    let mut rng = StdRng::seed_from_u64(42);
    let priorities: Vec<f64> = (0..500).map(|_| rng.gen_range(-1000.0..1000.0)).collect();
    let mut heap = MinHeap::from_priorities(priorities.iter().copied());
    assert!(is_heap_ordered(&heap));

    let mut popped = Vec::new();
    while let Some(entry) = heap.pop() {
        popped.push(entry.priority);
    }
    assert_eq!(popped.len(), priorities.len());
    assert!(popped.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(popped, sorted(priorities));
}

#[test]
fn bulk_construction_matches_repeated_add() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [0usize, 1, 2, 3, 10, 64, 129] {
        let priorities: Vec<f64> = (0..len).map(|_| f64::from(rng.gen_range(0..50u32))).collect();
        let bulk: Vec<f64> = MinHeap::from_priorities(priorities.iter().copied())
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.priority)
            .collect();

        let mut incremental: MinHeap<f64> = MinHeap::new();
        for &priority in &priorities {
            incremental.add(priority);
        }
        let incremental: Vec<f64> = incremental
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.priority)
            .collect();

        assert_eq!(bulk, incremental);
    }
}

#[test]
fn removing_absent_values_keeps_the_multiset() {
    let heap: MinHeap<String> = ["b", "a", "c"]
        .iter()
        .enumerate()
        .map(|(i, s)| HeapEntry::new(i as f64, s.to_string()))
        .collect();
    let mut copy = heap.clone();
    assert!(!copy.remove(&"z".to_string()));
    let before: Vec<_> = heap.iter().cloned().collect();
    let after: Vec<_> = copy.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn search_on_a_walled_grid() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Expensive cells surround the target on three sides.
    let grid = Grid::new(vec![
        vec![0.0, 1.0, 1.0, 1.0],
        vec![1.0, 100.0, 100.0, 1.0],
        vec![1.0, 100.0, 2.0, 1.0],
        vec![1.0, 100.0, 100.0, 100.0],
    ])
    .unwrap();

    let to_center = SearchOptions {
        end: Some(Point::new(2, 2)),
        ..Default::default()
    };
    assert_eq!(shortest_path(&grid, &to_center), Ok(Some(7.0)));

    let diagonal = SearchOptions {
        allow_diagonals: true,
        ..to_center.clone()
    };
    assert_eq!(shortest_path(&grid, &diagonal), Ok(Some(5.0)));

    let outside = SearchOptions {
        end: Some(Point::new(-1, 2)),
        ..Default::default()
    };
    assert_eq!(shortest_path(&grid, &outside), Ok(None));
}
