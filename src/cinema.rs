//! Cinema overlay: a control toolbar laid over an existing media element.
//!
//! The overlay never creates media; it is handed an element, keeps a
//! small `CinemaState` and re-renders the affected `Toolbar` part after
//! every operation or media signal.

mod attach;
mod model;
mod toolbar;

pub use attach::{PageElement, attach_all};
pub use model::*;
pub use toolbar::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CinemaError {
    #[error("unsupported element {name:?}: expected a media element")]
    UnsupportedElement { name: String },
}
