//! Conversion between key kinds.
//!
//! Both functions are written against [`KeyFunctions`] only. A conversion is
//! legal when the target kind supports the version marker of the source
//! instance's current discriminant; the 32-byte value is copied unchanged.

use crate::error::KeyError;
use crate::key_functions::KeyFunctions;

/// Whether `from` may be reinterpreted as a `T`.
pub fn can_convert<T: KeyFunctions, F: KeyFunctions>(from: &F) -> bool {
    T::is_key_version_supported(F::to_key_version(from.key_type()))
}

/// Reinterpret `from` as a `T`, keeping its 32-byte value.
///
/// Fails with [`KeyError::UnsupportedVersion`] whenever
/// [`can_convert::<T, F>`](can_convert) is false. Converting a union kind into
/// itself keeps the source's discriminant.
pub fn convert_key<T: KeyFunctions, F: KeyFunctions>(from: &F) -> Result<T, KeyError> {
    let version = F::to_key_version(from.key_type());
    if !T::is_key_version_supported(version) {
        tracing::debug!(
            from = F::key_type_name(),
            to = T::key_type_name(),
            ?version,
            "rejected key conversion"
        );
        return Err(KeyError::UnsupportedVersion {
            key_type: T::key_type_name(),
            version,
        });
    }

    let mut to = T::with_key_type(T::to_key_type(version)?);
    *to.key_value_mut() = *from.key_value();

    tracing::trace!(
        from = F::key_type_name(),
        to = T::key_type_name(),
        ?version,
        "converted key"
    );
    Ok(to)
}
