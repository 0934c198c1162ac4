//! Backend Bindings
//!
//! Frontend bindings to the todo REST backend and to browser dialogs.

mod dialog;
mod todo;

pub use dialog::*;
pub use todo::*;
