//! Container configuration

use crate::error::{DiError, DiResult};
use serde::{Deserialize, Serialize};

/// Settings for a [`Container`](crate::Container).
///
/// # Examples
///
/// ```
/// use armature_di::ContainerConfig;
///
/// let config = ContainerConfig::from_toml_str("implicit_dependencies = true").unwrap();
/// assert!(config.implicit_dependencies);
///
/// let config = ContainerConfig::new().with_implicit_dependencies(false);
/// assert_eq!(config, ContainerConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
	/// Build unregistered dependencies that are declared as constructible.
	///
	/// Off by default: every dependency must then have a binding, and a missing one
	/// fails the build no matter how deep it sits.
	pub implicit_dependencies: bool,
}

impl ContainerConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_implicit_dependencies(mut self, enabled: bool) -> Self {
		self.implicit_dependencies = enabled;
		self
	}

	/// Parses a configuration from a TOML document.
	pub fn from_toml_str(source: &str) -> DiResult<Self> {
		toml::from_str(source).map_err(|e| DiError::Config(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn empty_document_yields_defaults() {
		// Act
		let config = ContainerConfig::from_toml_str("").unwrap();

		// Assert
		assert_eq!(config, ContainerConfig::default());
		assert!(!config.implicit_dependencies);
	}

	#[rstest]
	#[case("implicit_dependencies = true", true)]
	#[case("implicit_dependencies = false", false)]
	fn reads_implicit_dependencies(#[case] source: &str, #[case] expected: bool) {
		// Act
		let config = ContainerConfig::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(config.implicit_dependencies, expected);
	}

	#[rstest]
	#[case("implicit_dependencies = \"yes\"")]
	#[case("cycle_detection = true")]
	fn rejects_invalid_documents(#[case] source: &str) {
		// Act
		let result = ContainerConfig::from_toml_str(source);

		// Assert
		assert!(matches!(result, Err(DiError::Config(_))));
	}
}
