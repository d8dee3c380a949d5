//! Per-frame gameplay
//!
//! All logic here is synchronous and frame-driven: an external driver
//! alternates `update` and `draw` and delivers input callbacks between
//! frames. Nothing blocks, schedules, or persists across runs.
//!
//! - `controller`: directional key state to velocity
//! - `viewport`: dead-zone scrolling camera
//! - `scroller`: the tile-map runner scenario
//! - `gallery`: mouse-aimed bullets and coins
//! - `volley`: enemies firing at random intervals

pub mod controller;
pub mod gallery;
pub mod scroller;
pub mod viewport;
pub mod volley;

pub use controller::DirectionalInput;
pub use gallery::TargetGallery;
pub use scroller::{GamePhase, ScrollerGame};
pub use viewport::Viewport;
pub use volley::EnemyVolley;
