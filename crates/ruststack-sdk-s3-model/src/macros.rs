/// Declare a string-valued S3 enumeration.
///
/// Generates `as_str`, `Display`, a strict `FromStr` (unknown values are an
/// [`SdkError::InvalidEnumValue`](ruststack_sdk_core::SdkError)) and a lenient
/// `from_wire` used when decoding responses.
macro_rules! s3_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value accepted by the service.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Wire representation.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Parse a value received from the service; `None` for unknown values.
            #[must_use]
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ruststack_sdk_core::SdkError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_wire(value)
                    .ok_or_else(|| ruststack_sdk_core::SdkError::invalid_enum(stringify!($name), value))
            }
        }
    };
}
