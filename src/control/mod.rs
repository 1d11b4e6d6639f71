//! Control structures for functional programming.
//!
//! - [`Optional`]: a value that is either present or absent
//!
//! # Examples
//!
//! ```rust
//! use fplist::control::Optional;
//!
//! let port: Optional<u16> = Optional::from("8080".parse().ok());
//! assert_eq!(port.filter(|p| *p > 1024).get_or_else(|| 80), 8080);
//! ```

mod optional;

pub use optional::Optional;
