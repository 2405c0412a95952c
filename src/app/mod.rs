//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod actor;
pub mod commands;
pub mod composer;
pub mod editor;
pub mod focus;
pub mod input;
pub mod method;
pub mod panel;
pub mod response;
pub mod state;

pub use actor::AppActor;
pub use composer::RequestComposer;
pub use editor::CellEditor;
pub use focus::{FocusController, FocusTarget};
pub use method::{MethodList, MethodSelector};
pub use panel::{ParamPanel, TableSlot};
pub use state::{AppState, Overlay};
