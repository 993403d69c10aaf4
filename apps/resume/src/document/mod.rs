pub mod controller;
pub mod events;

pub use controller::DocumentController;
pub use events::EditEvent;
