//! Parallel access benchmark: several threads share one CollisionGrid.
//!
//! Every call takes the single grid lock, so this measures contention on the
//! coarse lock rather than parallel speedup.

use collision_grid::{CollisionGrid, Rect};
use rand::Rng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    println!("collision-grid Parallel Benchmark");
    println!("=================================\n");

    let items_per_thread = 1_000_u32;
    let rounds = 50_u32;

    for num_threads in [1_u32, 2, 4, 8] {
        let grid = Arc::new(CollisionGrid::new(700.0, 700.0, 40, 40).unwrap());
        let start = Instant::now();

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let grid = Arc::clone(&grid);
                thread::spawn(move || {
                    let mut rng = rand::rngs::StdRng::seed_from_u64(95_756_739 + u64::from(thread_id));
                    let mut results = Vec::new();
                    let base = thread_id * items_per_thread;
                    for _ in 0..rounds {
                        for id in base..base + items_per_thread {
                            let x = rng.random_range(0.0..700.0);
                            let y = rng.random_range(0.0..700.0);
                            let aabb = Rect::new(x, y, 11.0, 11.0);
                            grid.move_to(id, aabb).unwrap();
                            grid.query(aabb, &mut results).unwrap();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let elapsed = start.elapsed();
        let total_ops = f64::from(num_threads * items_per_thread) * f64::from(rounds) * 2.0;
        println!(
            "  {} threads: {:>9.2}ms ({:.3}µs/op, {} items tracked)",
            num_threads,
            elapsed.as_secs_f64() * 1000.0,
            elapsed.as_secs_f64() * 1_000_000.0 / total_ops,
            grid.item_count().unwrap()
        );
    }
}
