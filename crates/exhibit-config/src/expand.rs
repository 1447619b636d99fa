//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Strings without `${` are returned unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut unset = Vec::new();
    let expanded = shellexpand::env_with_context_no_errors(value, |var| {
        let found = std::env::var(var).ok();
        if found.is_none() {
            unset.push(var.to_owned());
        }
        found
    })
    .into_owned();

    // Unset variables without a default are left in place.
    if let Some(var) = unset
        .into_iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }

    Ok(expanded)
}
