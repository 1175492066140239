//! Field binding routines called by derive-generated code

use crate::descriptor::FieldDescriptor;
use crate::error::ConfError;
use crate::lookup::Lookup;
use crate::value::FromEnvStr;

/// Bind one field according to its descriptor.
///
/// Order of resolution:
/// 1. Value of `desc.key` in `env`, converted to `T`
/// 2. `desc.default`, converted to `T`
/// 3. `MissingRequiredValue` if `desc.required`
/// 4. `T::default()`
pub fn bind_field<T, L>(env: &L, desc: &FieldDescriptor) -> Result<T, ConfError>
where
    T: FromEnvStr,
    L: Lookup + ?Sized,
{
    if let Some(raw) = env.lookup(desc.key)? {
        tracing::trace!(key = desc.key, "read from environment");
        return convert(desc.key, raw);
    }

    if let Some(default) = desc.default {
        tracing::debug!(key = desc.key, "unset, applying declared default");
        return convert(desc.key, default.to_string());
    }

    if desc.required {
        return Err(ConfError::missing(desc.key));
    }

    tracing::debug!(key = desc.key, "unset, using zero value");
    Ok(T::default())
}

/// Bind an `Option<T>` field: `None` when unset.
pub fn bind_optional<T, L>(env: &L, desc: &FieldDescriptor) -> Result<Option<T>, ConfError>
where
    T: FromEnvStr,
    L: Lookup + ?Sized,
{
    match env.lookup(desc.key)? {
        Some(raw) => {
            tracing::trace!(key = desc.key, "read from environment");
            convert(desc.key, raw).map(Some)
        }
        None => Ok(None),
    }
}

fn convert<T: FromEnvStr>(key: &str, raw: String) -> Result<T, ConfError> {
    T::from_env_str(&raw).map_err(|message| ConfError::conversion::<T>(key, raw, message))
}
