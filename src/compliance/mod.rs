//! Java compliance levels.
//!
//! A [`Compliance`] is parsed from strings such as `8`, `1.8`, `11.0.2`,
//! `11+` or `11..17` and decides whether a discovered runtime version is
//! acceptable.

pub mod level;
pub mod matcher;

pub use level::Compliance;
pub use matcher::satisfies;
