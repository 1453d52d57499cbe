pub mod animation;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod headless;
pub mod math;
pub mod page;
pub mod props;
pub mod render;
pub mod scene;
pub mod snapshot;
pub mod stage;
pub mod studio;

pub use config::Config;
pub use stage::{about_stage, hero_stage, Stage};
pub use studio::Studio;
