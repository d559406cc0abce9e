//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod actress_client;
pub mod entity_client;

pub use actor_client::*;
pub use actress_client::*;
pub use entity_client::*;
