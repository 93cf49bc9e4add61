//! Chatmark
//!
//! A closed registry of display codes for chat-style console text - 16
//! colors, 5 format modifiers and a reset - plus stateless transforms over
//! strings containing them:
//!
//! - `code`: the code vocabulary, character lookup, categories, names
//! - `transform`: strip codes from text, translate an alternate marker
//!   character into the canonical one
//!
//! Codes are embedded in text as `MARKER` followed by the code's identifying
//! character. This crate only manipulates marked-up text; rendering it is a
//! consumer's concern.

pub mod code;
pub mod transform;

pub use code::{Category, Code, ParseCodeError, MARKER};
pub use transform::{strip_codes, translate_alternate_codes};
