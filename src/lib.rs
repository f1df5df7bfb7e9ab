//! Cat scratches on a fish tank: hold the mouse button and drag to leave
//! bundles of white claw marks over a static aquarium scene.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod random;
pub mod raster;
pub mod sampler;
pub mod scene;
pub mod session;
pub mod store;
pub mod types;
