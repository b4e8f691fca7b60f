//! Lenient enum names in config files

/// Implements `Deserialize` for a fieldless enum from a fixed table of
/// names, ignoring ASCII case, so `"Windows"`, `"windows"` and `"WINDOWS"`
/// in a config file all pick the same [`Platform`](crate::Platform).
///
/// ```ignore
/// impl_case_insensitive_deserialize!(Platform, Posix => "posix", Windows => "windows");
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $name:literal),+ $(,)?) => {
        impl<'de> ::serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $(
                    if raw.eq_ignore_ascii_case($name) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(::serde::de::Error::custom(format!(
                    "'{}' is not a known name (accepted: {})",
                    raw,
                    [$($name),+].join(", ")
                )))
            }
        }
    };
}
