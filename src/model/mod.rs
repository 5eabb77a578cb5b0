//! The structural line model.
//!
//! An ordered sequence of [`Line`] records (text plus indentation level),
//! with mutation operations that keep the indentation invariants intact.
//! The model knows nothing about the editing surface; it is addressed purely
//! by index.

mod line;
mod lines;

pub use line::Line;
pub use lines::{EditScope, IndentPolicy, LineModel, ModelError};
