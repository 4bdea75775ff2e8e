use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid value for {key}: {reason} (value: {value})")]
pub(crate) struct SettingError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) reason: String,
}

impl SettingError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
