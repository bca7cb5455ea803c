//! Headless moving-sprite simulation: sprites bounce around a 700x700 world,
//! are moved in the grid every frame, and the grid density is printed.
use collision_grid::prelude::*;
use rand::Rng;
use rand::SeedableRng;

const NUMBER_OF_SPRITES: u32 = 50;
const FRAMES: usize = 600;

struct Sprite {
    id: u32,
    position: Vec2,
    trajectory: Vec2,
    velocity: f64,
    width: f64,
    height: f64,
}

impl Sprite {
    fn update(&mut self, bounds: Vec2) {
        self.position.x += self.trajectory.x * self.velocity;
        self.position.y += self.trajectory.y * self.velocity;

        if self.position.x <= 0.0 || self.position.x >= bounds.x {
            self.position.x = self.position.x.clamp(0.0, bounds.x);
            self.trajectory.x = -self.trajectory.x;
        }
        if self.position.y <= 0.0 || self.position.y >= bounds.y {
            self.position.y = self.position.y.clamp(0.0, bounds.y);
            self.trajectory.y = -self.trajectory.y;
        }
    }

    fn aabb(&self) -> Rect {
        Rect::from_center(self.position, self.width, self.height)
    }
}

fn main() {
    let config = GridConfig::new(700.0, 700.0, 40, 40);
    let mut grid = SpatialGrid::from_config(&config).unwrap();
    let bounds = Vec2::new(config.width, config.height);
    let mut rng = rand::rngs::StdRng::seed_from_u64(2016);

    let mut sprites: Vec<Sprite> = (0..NUMBER_OF_SPRITES)
        .map(|id| {
            let dx: f64 = rng.random_range(-1.0..1.0);
            let dy: f64 = rng.random_range(-1.0..1.0);
            let len = (dx * dx + dy * dy).sqrt().max(f64::EPSILON);
            Sprite {
                id,
                position: Vec2::new(rng.random_range(0.0..700.0), rng.random_range(0.0..700.0)),
                trajectory: Vec2::new(dx / len, dy / len),
                velocity: rng.random_range(0.1..4.0),
                width: rng.random_range(5.0..53.0),
                height: rng.random_range(5.0..53.0),
            }
        })
        .collect();

    let mut candidates = Vec::new();
    let mut total_candidates = 0_usize;
    for _ in 0..FRAMES {
        for sprite in &mut sprites {
            sprite.update(bounds);
            grid.move_to(sprite.id, sprite.aabb());
        }
        for sprite in &sprites {
            grid.query(sprite.aabb(), &mut candidates);
            total_candidates += candidates.iter().filter(|&&other| other != sprite.id).count();
        }
    }

    println!("{} frames, {} sprites", FRAMES, NUMBER_OF_SPRITES);
    println!(
        "average broad-phase candidates per sprite: {:.2}",
        total_candidates as f64 / (FRAMES as f64 * f64::from(NUMBER_OF_SPRITES))
    );
    println!("occupied cells: {} of {}", grid.occupied_cell_count(), grid.cells_x() * grid.cells_y());
    println!("idle pooled containers: {:?}\n", grid.pool_stats());

    // Density map: '.' empty, digits = items in the cell, '#' for 10 or more
    for y in 0..grid.cells_y() as i32 {
        let row: String = (0..grid.cells_x() as i32)
            .map(|x| match grid.count(Cell::new(x, y)) {
                0 => '.',
                n => u32::try_from(n)
                    .ok()
                    .and_then(|digit| char::from_digit(digit, 10))
                    .unwrap_or('#'),
            })
            .collect();
        println!("{}", row);
    }
}
