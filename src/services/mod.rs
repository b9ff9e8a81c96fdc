// Service module exports

pub mod event;
pub mod interaction;
pub mod layout;
pub mod schedule;
pub mod settings;
