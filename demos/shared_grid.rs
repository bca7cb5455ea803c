//! Share one grid between worker threads.
use collision_grid::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), GridError> {
    let grid = Arc::new(CollisionGrid::new(700.0, 700.0, 40, 40)?);

    let handles: Vec<_> = (0..4_u32)
        .map(|worker| {
            let grid = Arc::clone(&grid);
            thread::spawn(move || -> Result<(), GridError> {
                for step in 0..100_u32 {
                    let id = worker * 1000 + step % 10;
                    let x = f64::from(step * 7 % 700);
                    let y = f64::from(worker * 150);
                    grid.move_to(id, Rect::new(x, y, 20.0, 20.0))?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked")?;
    }

    println!("items: {}", grid.item_count()?);
    println!("occupied cells: {}", grid.occupied_cell_count()?);

    grid.dispose()?;
    println!("after dispose: {:?}", grid.item_count());
    Ok(())
}
