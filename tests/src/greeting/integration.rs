#![cfg(test)]
use greeter_common::config::{Config, Verbosity};
use greeter_core::{Greeter, MESSAGE, get_message, greet};

/// Calling the operation with no setup yields the literal.
#[test]
fn message_without_setup() {
    assert_eq!(get_message(), "Hello World!");
    assert_eq!(MESSAGE, get_message());
}

#[test]
fn message_is_stable_across_greeters() {
    let messages: Vec<&str> = (0..10).map(|_| Greeter::new().message()).collect();
    assert!(messages.iter().all(|m| *m == "Hello World!"));
}

/// Verbosity only ever goes up with more `-v`, and `-q` is the floor.
#[test]
fn verbosity_is_monotonic() {
    let levels: Vec<Verbosity> = (0..5).map(|v| Verbosity::from_flags(false, v)).collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    assert!(Verbosity::from_flags(true, 0) < levels[0]);
}

#[test]
fn greet_into_buffer() {
    let mut out: Vec<u8> = Vec::new();
    greet(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Hello World!\n");
    let cfg = Config {
        verbosity: Verbosity::from_flags(false, 0),
        color: false,
    };
    assert_eq!(cfg.verbosity, Verbosity::Normal);
    assert!(!cfg.color);
}
