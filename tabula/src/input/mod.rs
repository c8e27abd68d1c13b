//! Decorated text input.
//!
//! Independent of the table; it shares only the widget-handle conventions.

mod appearance;
mod state;

pub use appearance::{
    Affordance, Appearance, InputKind, InputMessage, InputSize, InputVariant, MessageKind, Tone,
};
pub use state::{InputField, InputId, MASK_CHAR};
