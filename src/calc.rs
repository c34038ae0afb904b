//! Small numeric helpers: one `add` for every numeric type, in-place
//! updates through `&mut`, and parsing that reports failure with `Option`.

use std::ops::Add;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn double_in_place(x: &mut i32) {
    *x *= 2;
}

/// Parses a non-negative integer. Anything else, including negative numbers, is `None`.
pub fn try_parse_positive(input: &str) -> Option<i32> {
    input.parse::<i32>().ok().filter(|value| *value >= 0)
}

/// Greeting with a default that implementors may replace.
pub trait Greeter {
    fn greet(&self) -> &'static str {
        "Hello from Base"
    }
}

pub struct Base;

impl Greeter for Base {}

pub struct Derived;

impl Greeter for Derived {
    fn greet(&self) -> &'static str {
        "Hello from Derived"
    }
}
