//! UI building blocks shared by the CO and Principal dashboards.
//!
//! - [`modal`]: boolean modal visibility with injectable show/hide side effects
//! - [`spacing`]: the spacing scale design tokens

pub mod modal;
pub mod spacing;

pub use modal::{ModalAction, ModalCallbacks, ModalVisibility};
pub use spacing::Spacing;
