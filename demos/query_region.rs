//! Find entities near a box, a point and a cell range.
use collision_grid::prelude::*;

fn main() {
    let mut grid = SpatialGrid::new(100.0, 100.0, 10, 10).unwrap();
    grid.add("ship", Rect::from_corners(5.0, 5.0, 25.0, 15.0)); // cells (0,0)-(2,1)
    grid.add("rock", Vec2::new(12.0, 12.0));                   // cell (1,1)
    grid.add("buoy", Cell::new(7, 7));

    let near = grid.get(Rect::from_corners(5.0, 5.0, 25.0, 25.0));
    println!("Near box: {:?}", near);
    assert_eq!(near, vec!["ship", "rock"], "ship listed once although it spans six cells");

    println!("At point: {:?}", grid.get(Vec2::new(15.0, 15.0)));
    println!("First in lower half: {:?}", grid.first(CellRange::new(Cell::new(0, 5), Cell::new(9, 9))));
    assert_eq!(grid.first(CellRange::new(Cell::new(0, 5), Cell::new(9, 9))), Some(&"buoy"));

    // Out-of-range targets clamp onto the border
    grid.add("drifter", Vec2::new(-40.0, 400.0));
    println!("drifter occupies {:?}", grid.cells_of(&"drifter"));
    assert_eq!(grid.cells_of(&"drifter"), &[Cell::new(0, 9)]);
}
