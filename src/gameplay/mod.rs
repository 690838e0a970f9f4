pub mod cannon;
pub mod lifetime;
pub mod loss;
pub mod scoring;
pub mod spawner;
pub mod target;
