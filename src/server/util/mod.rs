//! Small helpers shared by the model and service layers.

pub mod time;
pub mod validation;
