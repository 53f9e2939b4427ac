pub mod primitives;
pub mod scene;
