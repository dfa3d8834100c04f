//! inclusa-render
//!
//! Server-side HTML for the questionnaire and dashboard. A page is a pure
//! projection of the session into a [`view::PageView`], rendered through
//! embedded Tera templates.

pub mod chart;
pub mod error;
pub mod render;
pub mod view;

pub use error::RenderError;
pub use render::Renderer;
