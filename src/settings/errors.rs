use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {key}: {reason} (value: {value})")]
pub(crate) struct SettingsError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) reason: String,
}

impl SettingsError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key,
			value: value.into(),
			reason: reason.into(),
		}
	}
}
