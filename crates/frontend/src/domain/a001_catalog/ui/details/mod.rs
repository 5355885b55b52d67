pub mod controller;
pub mod view;

pub use view::DetailOverlay;
