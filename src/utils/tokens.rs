/// Implements string tokens for a closed, fieldless enum.
///
/// Generates `token()`, `ALL`, `Display`, and `From<&str>`/`From<String>`
/// conversions. Unknown strings map to the enum's `Default` variant so parsing
/// can never fail.
#[macro_export]
macro_rules! closed_enum_tokens {
    ( $name:ident { $( $variant:ident => $token:literal ),+ $(,)? } ) => {
        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn token(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $token => $name::$variant, )+
                    _ => $name::default(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}
