//! Client for the external scene-recognition service.

mod trace_moe;
mod traits;

pub use trace_moe::{SearchResponse, TraceMoeClient};
pub use traits::SceneLookup;
