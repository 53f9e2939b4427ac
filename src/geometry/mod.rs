pub mod grid;
pub mod isometric;
