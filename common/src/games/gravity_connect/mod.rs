mod bot_controller;

pub use bot_controller::{CENTER_BIAS, select_column};
