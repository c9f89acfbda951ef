//! Form domain layer
//!
//! Field definitions, the validator and the state holder behind the
//! editing screen.

mod field;
mod form_state;
mod validation;

pub use field::{Field, FormData};
pub use form_state::{FormButton, FormState};
