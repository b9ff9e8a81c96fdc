pub mod day_view;
pub mod event_rendering;
pub(crate) mod palette;
