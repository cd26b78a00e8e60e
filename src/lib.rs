pub use {
    // export globals
    error::{Error, Result},
    point::{ParsePointError, Point},
};

pub mod error;
pub mod point;

mod macros {
    #[macro_export]
    /// Creates a [`Point`](crate::point::Point) from a `hash:index` literal
    macro_rules! point (
        ($s:expr) => (
            <$crate::point::Point as core::str::FromStr>::from_str($s).unwrap()
        )
    );
}
