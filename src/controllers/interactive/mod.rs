//! Background rendering for interactive hosts.
//!
//! Hosts submit immutable [`RenderRequest`] snapshots; a worker thread renders
//! the newest one and publishes the outcome through an
//! [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::render_request::RenderRequest;
pub use events::render_event::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
