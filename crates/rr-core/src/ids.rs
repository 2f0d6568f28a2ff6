//! Strongly typed identifier wrappers.
//!
//! Road-data vertex ids are OSM-style integers (e.g. `314080060`) and may be
//! negative, so the wrapper is a signed 64-bit integer.  IDs are `Copy + Ord + Hash` so they can be used as map
//! keys and sorted collection elements without ceremony.

use std::fmt;
use std::str::FromStr;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Raw integer value as it appears in road data.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            /// Bare integer, so ids print exactly as they appear in road data.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;
            fn from_str(s: &str) -> Result<$name, Self::Err> {
                s.trim().parse::<$inner>().map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a road-network vertex (intersection or road endpoint).
    ///
    /// Carries no data itself; coordinates and street names live in the side
    /// tables of `rr_network::RoadMap`.
    pub struct VertexId(i64);
}
