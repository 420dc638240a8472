pub mod api;
pub mod components;
pub mod editor;
pub mod interop;
pub mod shell;
pub mod state;
pub mod storage;

pub use api::*;
pub use components::*;
pub use editor::*;
pub use interop::*;
pub use shell::*;
