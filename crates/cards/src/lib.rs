//! Card primitives for hanabi.
//!
//! ## Core Types
//!
//! - [`Color`] — One of the five firework colours (B, G, R, W, Y)
//! - [`Value`] — Card value 1 through 5
//! - [`Card`] — An immutable `(Color, Value)` pair
//! - [`Deck`] — An ordered sequence of cards consumed from the front
//!
//! ## Composition
//!
//! The standard deck holds 50 cards: per colour, three 1s, two each of
//! 2/3/4, and one 5. [`Deck::new`] produces a uniformly shuffled copy.
mod card;
mod color;
mod deck;
mod value;

pub use card::*;
pub use color::*;
pub use deck::*;
pub use value::*;
