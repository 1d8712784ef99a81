//! Document layer the validator reads from and writes to
//!
//! - `ids`: element and field identifiers
//! - `traits`: the `Document` capability interface
//! - `memory`: in-memory document backing the terminal UI

mod ids;
mod memory;
mod traits;

pub use ids::{ElementId, FieldId, InputMode, MessageKind, ParseElementIdError};
pub use memory::MemoryDocument;
pub use traits::Document;

#[cfg(test)]
pub use traits::MockDocument;
