//! Pure data structures exchanged between the service and its collaborators.

pub mod customer;
pub mod order;
pub mod product;
pub mod summary;
pub mod tax;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use summary::*;
pub use tax::*;
