/// Defines a fieldless enum whose variants carry a wire token and a
/// human-readable label, and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)
/// - `ALL` (variants in declaration order)
/// - inherent `token()` / `display_name()` accessors plus the
///   [`LabeledEnum`](crate::model::LabeledEnum) impl
/// - `Display` (the wire token) and case-insensitive `FromStr`
///
/// Usage:
///   define_labeled_enum!(BarLocation {
///       Hubble = "HUBBLE" => "Hubble Community Café",
///       Meteor = "METEOR" => "Meteor Community Café",
///   });
#[macro_export]
macro_rules! define_labeled_enum {
    ($(#[$meta:meta])* $name:ident {
        $($(#[$vmeta:meta])* $variant:ident = $token:literal => $label:literal),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
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

            /// Wire token, matching the serialized representation.
            pub fn token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            /// Human-readable label shown in forms, feeds and reports.
            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl $crate::model::LabeledEnum for $name {
            fn token(&self) -> &'static str {
                $name::token(self)
            }

            fn display_name(&self) -> &'static str {
                $name::display_name(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($token) {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::model::UnknownToken::new(stringify!($name), s))
            }
        }
    };
}
