//! Presentation of the board
//!
//! Layout and frame composition are plain functions of the board so they can
//! be exercised without a display. The window module wires them to winit.

/// Software rendering of the board into pixels
pub mod frame;
/// Slot geometry and hit testing
pub mod layout;
/// Desktop window and event handling
pub mod window;
