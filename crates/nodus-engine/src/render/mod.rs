//! GPU rendering.
//!
//! The renderer owns its GPU resources (pipeline, vertex buffer). They are built
//! once from a linked `ShaderProgram`; per frame it only binds and draws.

mod triangle;

pub use triangle::{TRIANGLE, TriangleRenderer, Vertex};
