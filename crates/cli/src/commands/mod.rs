pub mod label;
pub mod shorten;

pub use label::label_command;
pub use shorten::shorten_command;
