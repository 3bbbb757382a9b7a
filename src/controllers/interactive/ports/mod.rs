//! Interfaces between the interactive controller and the presentation layer.

pub mod presenter;
