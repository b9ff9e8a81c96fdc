// Module exports for models

pub mod color;
pub mod event;
pub mod settings;
pub mod time_range;
