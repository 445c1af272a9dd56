pub mod app;
pub mod components;
pub mod modal;
pub mod state;
pub mod status;

pub use app::ContactApp;
