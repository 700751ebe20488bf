//! Render dispatch
//!
//! Decides when a frame is redrawn and what it shows. The picture is
//! composed into a `Scene` by a pure function and replayed onto a
//! `BoardRenderer`.

pub mod dispatcher;
pub mod scene;

pub use dispatcher::RenderDispatcher;
pub use scene::{compose, Scene, Sprite};
