use {
    crate::Json,
    serde::{Deserialize, Deserializer, de::DeserializeOwned},
    std::{fmt::Display, str::FromStr},
};

/// Deserialize a decimal amount that upstream may encode either as a JSON
/// string or as a JSON number. `null` becomes an empty string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Json::deserialize(deserializer)? {
        Json::String(s) => Ok(s),
        Json::Number(n) => Ok(n.to_string()),
        Json::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or a number, got: {other}"
        ))),
    }
}

/// Like [`string_or_number`], but also accepts booleans, and maps `null` to
/// `None`.
pub fn opt_string_or_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Json::deserialize(deserializer)? {
        Json::String(s) => Ok(Some(s)),
        Json::Number(n) => Ok(Some(n.to_string())),
        Json::Bool(b) => Ok(Some(b.to_string())),
        Json::Null => Ok(None),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar, got: {other}"
        ))),
    }
}

/// Deserialize a field that upstream may send as `null`, reading `null` as
/// the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an integer that upstream may encode as a JSON number or as a
/// numeric string. `null` becomes the default.
pub fn int_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr + Default,
    T::Err: Display,
{
    match Json::deserialize(deserializer)? {
        Json::Null => Ok(T::default()),
        Json::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        other => T::deserialize(other).map_err(serde::de::Error::custom),
    }
}
