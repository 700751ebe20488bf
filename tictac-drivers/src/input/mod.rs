//! Input source implementations

pub mod panel;

pub use panel::SwitchPanel;
