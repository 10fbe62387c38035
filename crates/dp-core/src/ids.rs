//! Strongly typed identifier wrappers for philosophers and forks.
//!
//! Both ids are dense ring positions `0..n`, so the inner integer doubles as
//! a `Vec` index.  Prefer `.index()` over `id.0 as usize` at call sites.

use std::fmt;

/// Generate a typed ring-position wrapper around a `u32`.
///
/// `$tag` is the short prefix used by `Display` (`P3`, `F0`, …), which keeps
/// log lines compact when a tick touches every seat.
macro_rules! ring_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `true` for even ring positions.
            #[inline]
            pub fn is_even(self) -> bool {
                self.0 % 2 == 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "{}"), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

ring_id! {
    /// Seat index of a philosopher at the table.
    pub struct PhilosopherId, "P";
}

ring_id! {
    /// Index of a fork.  Fork `i` sits between philosophers `i - 1` and `i`.
    pub struct ForkId, "F";
}
