//! Building through the `armature` facade

use armature::prelude::*;
use rstest::rstest;
use std::sync::LazyLock;

static GREETING: LazyLock<Identifier> = LazyLock::new(|| Identifier::new("GREETING"));

#[injectable]
struct Greeter {
	#[inject(GREETING)]
	greeting: String,
	#[no_inject(default = '!')]
	punctuation: char,
}

impl Greeter {
	fn greet(&self, name: &str) -> String {
		format!("{}, {name}{}", self.greeting, self.punctuation)
	}
}

#[rstest]
fn macro_resolves_through_the_facade() {
	// Arrange
	let mut container = Container::new();
	container.bind(Binding::value(&GREETING, "Hello".to_string()));

	// Act
	let greeter = container.build::<Greeter>().unwrap();

	// Assert
	assert_eq!(greeter.greet("world"), "Hello, world!");
}

#[rstest]
fn config_is_loaded_from_toml() {
	// Arrange
	let config = ContainerConfig::from_toml_str("implicit_dependencies = true").unwrap();

	// Act
	let container = Container::with_config(config);

	// Assert
	assert!(container.config().implicit_dependencies);
	assert!(matches!(
		container.build::<Greeter>(),
		Err(DiError::MissingDependency { .. })
	));
}
