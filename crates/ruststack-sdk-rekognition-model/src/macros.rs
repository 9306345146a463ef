/// Declare a string-valued Rekognition enumeration.
///
/// Values outside the known set decode into `Unknown(String)` so a newer
/// service response never fails to parse. Parsing with `FromStr` is strict
/// and rejects anything not in the known set.
macro_rules! rekognition_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A value this client does not know about.
            Unknown(String),
        }

        impl $name {
            /// Every known value.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Whether this is one of the known values.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }

            fn from_wire(value: String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(value),
                }
            }
        }

        impl $crate::types::EnumValue for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ruststack_sdk_core::SdkError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(ruststack_sdk_core::SdkError::invalid_enum(stringify!($name), s)),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from_wire(value))
            }
        }
    };
}

/// Bind an input type to its output type and operation.
macro_rules! operation {
    ($($input:ident => $output:ident : $op:ident),+ $(,)?) => {
        $(
            impl $crate::operations::OperationInput for $input {
                type Output = $output;
                const OPERATION: $crate::operations::RekognitionOperation =
                    $crate::operations::RekognitionOperation::$op;

                fn validate(&self) -> Result<(), ruststack_sdk_core::SdkError> {
                    $input::validate(self)
                }
            }
        )+
    };
}
