#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;
    use rand::Rng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn shared_grid() -> Arc<CollisionGrid<u32>> {
        Arc::new(CollisionGrid::new(700.0, 700.0, 40, 40).unwrap())
    }

    #[test]
    fn test_shared_grid_basic_operations() {
        let grid = shared_grid();
        grid.add(1, Rect::new(10.0, 10.0, 30.0, 30.0)).unwrap();
        grid.add(2, Vec2::new(20.0, 20.0)).unwrap();

        assert_eq!(grid.get(Rect::new(0.0, 0.0, 50.0, 50.0)).unwrap(), vec![1, 2]);
        assert_eq!(grid.first(Cell::new(1, 1)).unwrap(), Some(1));
        assert_eq!(grid.first(Cell::new(30, 30)).unwrap(), None);
        assert!(!grid.is_empty(Vec2::new(20.0, 20.0)).unwrap());
        assert_eq!(grid.cells_of(&2).unwrap(), vec![Cell::new(1, 1)]);

        grid.move_to(2, Vec2::new(650.0, 650.0)).unwrap();
        assert_eq!(grid.count(Cell::new(1, 1)).unwrap(), 1);
        assert_eq!(grid.item_count().unwrap(), 2);

        assert_eq!(grid.remove(Cell::new(37, 37)).unwrap(), 1);
        assert!(grid.remove_item(&1).unwrap());
        assert!(grid.all_items().unwrap().is_empty());
        assert!(grid.all_occupied_cells().unwrap().is_empty());
    }

    #[test]
    fn test_calls_from_other_threads_while_iterating_results() {
        let grid = shared_grid();
        for item in 0..10 {
            grid.add(item, Cell::new(0, 0)).unwrap();
        }

        // Results are owned snapshots, so the lock is free while they are walked
        for item in grid.get(Cell::new(0, 0)).unwrap() {
            let worker = {
                let grid = Arc::clone(&grid);
                thread::spawn(move || grid.move_to(item + 100, Cell::new(5, 5)))
            };
            worker.join().unwrap().unwrap();
            assert!(grid.remove_item(&item).unwrap());
        }
        assert_eq!(grid.count(Cell::new(5, 5)).unwrap(), 10);
        assert!(grid.is_empty(Cell::new(0, 0)).unwrap());
        assert!(grid.is_consistent().unwrap());
    }

    #[test]
    fn test_concurrent_disjoint_items_converge() {
        let grid = shared_grid();
        let num_threads = 8_u32;
        let items_per_thread = 50_u32;
        let barrier = Arc::new(Barrier::new(num_threads as usize));

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let grid = Arc::clone(&grid);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let mut rng = rand::rngs::StdRng::seed_from_u64(1000 + u64::from(thread_id));
                    let base = thread_id * items_per_thread;
                    let mut removed = HashSet::new();
                    let _ = barrier.wait();

                    for round in 0..20 {
                        for item in base..base + items_per_thread {
                            let x = rng.random_range(0.0..700.0);
                            let y = rng.random_range(0.0..700.0);
                            let aabb = Rect::new(x, y, rng.random_range(5.0..53.0), rng.random_range(5.0..53.0));
                            if round == 0 {
                                grid.add(item, aabb).unwrap();
                            } else {
                                grid.move_to(item, aabb).unwrap();
                            }
                            // Other threads never touch this item, so it is always present
                            assert!(grid.contains_item(&item).unwrap());
                        }
                    }

                    for item in (base..base + items_per_thread).step_by(3) {
                        assert!(grid.remove_item(&item).unwrap());
                        let _ = removed.insert(item);
                    }
                    removed
                })
            })
            .collect();

        let mut removed = HashSet::new();
        for handle in handles {
            removed.extend(handle.join().unwrap());
        }

        let expected: HashSet<u32> = (0..num_threads * items_per_thread)
            .filter(|item| !removed.contains(item))
            .collect();
        let tracked: HashSet<u32> = grid.all_items().unwrap().into_iter().collect();
        assert_eq!(tracked, expected);
        assert!(grid.is_consistent().unwrap());
    }

    #[test]
    fn test_move_never_observed_half_done() {
        let grid = shared_grid();
        grid.add(7, Vec2::new(5.0, 5.0)).unwrap();

        let mover = {
            let grid = Arc::clone(&grid);
            thread::spawn(move || {
                for i in 0..2000_u32 {
                    let x = f64::from(i % 40) * 17.5 + 1.0;
                    grid.move_to(7, Vec2::new(x, 350.0)).unwrap();
                }
            })
        };

        for _ in 0..2000 {
            assert!(grid.contains_item(&7).unwrap());
            assert_eq!(grid.cells_of(&7).unwrap().len(), 1);
        }
        mover.join().unwrap();
    }

    #[test]
    fn test_use_after_dispose_fails() {
        let grid = shared_grid();
        grid.add(1, Cell::new(0, 0)).unwrap();
        assert!(!grid.is_disposed());

        grid.dispose().unwrap();
        assert!(grid.is_disposed());
        assert_eq!(grid.add(2, Cell::new(0, 0)), Err(GridError::Disposed));
        assert_eq!(grid.get(Cell::new(0, 0)), Err(GridError::Disposed));
        assert_eq!(grid.first(Cell::new(0, 0)), Err(GridError::Disposed));
        assert_eq!(grid.all_items(), Err(GridError::Disposed));
        assert_eq!(grid.move_to(1, Cell::new(1, 1)), Err(GridError::Disposed));
        assert_eq!(grid.remove_item(&1), Err(GridError::Disposed));
        assert_eq!(grid.is_consistent(), Err(GridError::Disposed));
        assert_eq!(grid.dispose(), Err(GridError::Disposed));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let err = CollisionGrid::<u32>::new(700.0, 700.0, 0, 40).unwrap_err();
        assert!(matches!(err, GridError::InvalidCellCount { .. }));
        assert_eq!(err.to_string(), format!("invalid cell count on x axis: 0 (must be in 1..={})", i32::MAX));
    }
}
