//! Slide catalogue, navigation and the serializable deck session reducer.

pub mod domain;
mod navigation;
pub mod router;
mod session;
mod swipe;

pub use domain::{DeckError, Slide, SlideKind, SlideTheme};
pub use navigation::SlideCursor;
pub use router::deck_router;
pub use session::{Deck, DeckAction, DeckSession, DeckSnapshot};
pub use swipe::{SwipeDirection, SwipeGesture, TouchPoint, DEFAULT_SWIPE_THRESHOLD_PX};
