pub mod api;
pub mod controller;
pub mod core;
pub mod interaction;
pub mod persistence;
pub mod view;

pub use controller::CatController;
pub use core::SpyCatError;
