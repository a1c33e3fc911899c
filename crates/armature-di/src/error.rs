//! Error types for dependency resolution

use thiserror::Error;

/// Result alias used throughout the resolution engine.
pub type DiResult<T> = Result<T, DiError>;

/// Errors produced while registering bindings or building targets.
///
/// Every variant terminates the current `build` call. Nothing is retried and no
/// partial result is returned.
#[derive(Debug, Error)]
pub enum DiError {
	/// The chaining API was misused, or a registered key was passed to `build`.
	#[error("Usage error: {message}")]
	Usage { message: String },

	/// Resolution reached a key with no binding.
	#[error("Dependency missing: {key}")]
	MissingDependency { key: String },

	/// A resolved instance is not the type its consumer asked for.
	#[error("Type mismatch for {key}: expected {expected}")]
	TypeMismatch { key: String, expected: &'static str },

	/// A constructor asked for more arguments than were resolved for it.
	#[error("Missing argument {index} while constructing {type_name}")]
	MissingArgument {
		type_name: &'static str,
		index: usize,
	},

	/// Configuration could not be parsed.
	#[error("Configuration error: {0}")]
	Config(String),

	/// Error raised by a user constructor. Passed through the engine untouched.
	#[error(transparent)]
	Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl DiError {
	pub(crate) fn usage(message: impl Into<String>) -> Self {
		Self::Usage {
			message: message.into(),
		}
	}

	/// Wrap an arbitrary error raised inside an `Injectable::construct` body.
	///
	/// # Examples
	///
	/// ```
	/// use armature_di::DiError;
	///
	/// let err = DiError::custom(std::io::Error::other("disk full"));
	/// assert_eq!(err.to_string(), "disk full");
	/// ```
	pub fn custom<E>(error: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self::Custom(Box::new(error))
	}

	/// Returns `true` for [`DiError::MissingDependency`].
	pub fn is_missing_dependency(&self) -> bool {
		matches!(self, Self::MissingDependency { .. })
	}

	/// Returns `true` for [`DiError::Usage`].
	pub fn is_usage(&self) -> bool {
		matches!(self, Self::Usage { .. })
	}
}
