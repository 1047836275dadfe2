pub mod convert;
pub mod dict;
pub mod keypad;
