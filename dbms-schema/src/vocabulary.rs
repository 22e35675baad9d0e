//! Enumerated vocabularies shared with downstream tooling.
//!
//! Each vocabulary is a fieldless enum whose variants map one to one to a verbatim text token.

/// Declares a vocabulary enum with its verbatim tokens.
///
/// The generated type gets `ALL`, `as_str`, [`std::fmt::Display`], [`std::str::FromStr`]
/// (failing with the given [`crate::SchemaError`] variant) and serde/candid support,
/// where the wire form is the token itself.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $error:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            candid::CandidType,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the verbatim token for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::SchemaError;

            fn from_str(s: &str) -> $crate::error::SchemaResult<Self> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    other => Err($crate::error::SchemaError::$error(other.to_string())),
                }
            }
        }
    };
}
