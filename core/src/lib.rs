pub mod greeter;

pub use greeter::{Greeter, MESSAGE, get_message, greet};
