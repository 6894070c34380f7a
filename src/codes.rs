//! Code tables understood by the `swetest` executable.
//!
//! Every table is a plain enum with one variant per code. The
//! `code_table!` macro generates the code/label lookups, the reverse
//! lookup, `Display` and code-based serialization so that each table reads as data.

/// Generate an enum together with its code and label tables.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $code_ty:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr => $label:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in table order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Code passed to or printed by swetest
            pub fn code(self) -> $code_ty {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// Human readable label
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Reverse lookup by code
            pub fn from_code<C: Copy>(code: C) -> Option<Self>
            where
                $code_ty: PartialEq<C>,
            {
                Self::ALL.iter().copied().find(|entry| entry.code() == code)
            }

            /// Comma separated list of every known code, used in error messages
            pub fn expected_codes() -> String {
                Self::ALL
                    .iter()
                    .map(|entry| entry.code().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.code(), serializer)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

pub mod body;
pub mod house;
pub mod options;
pub mod property;

pub use body::{Body, BodySelection};
pub use house::{HousePoint, HouseSystem};
pub use options::{EphOption, ObserverPosition, Sidereal};
pub use property::Property;
