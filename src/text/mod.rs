pub mod char;
pub mod class;
pub mod end;
pub mod string;

pub use char::{any_char, is_char};
pub use class::{alphanumeric, char_class};
pub use end::{end_of_input, skip_rest};
pub use string::is_string;
