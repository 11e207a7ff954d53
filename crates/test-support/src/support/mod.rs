pub mod providers;
pub mod resources;
