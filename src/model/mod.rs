//! Pure data structures (DTOs) implementing the [`RemoteEntity`](crate::framework::RemoteEntity) trait.

pub mod actor;
pub mod actress;
pub mod nationality;
pub mod person;

pub use actor::*;
pub use actress::*;
pub use nationality::*;
pub use person::*;
