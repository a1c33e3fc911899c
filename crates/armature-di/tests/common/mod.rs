//! Shared fixtures for the integration tests

#![allow(dead_code)]

use armature_di::{Arguments, Container, ContainerConfig, DiResult, Injectable};
use rstest::fixture;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize logging for tests (call once)
///
/// Honors `RUST_LOG`, so `RUST_LOG=armature_di=trace` shows every resolution step.
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_test_writer()
			.try_init();
	});
}

/// Empty container with strict lookups
#[fixture]
pub fn container() -> Container {
	init_test_logging();
	Container::new()
}

/// Empty container that builds unregistered constructible parameters itself
#[fixture]
pub fn implicit_container() -> Container {
	init_test_logging();
	Container::with_config(ContainerConfig::new().with_implicit_dependencies(true))
}

pub trait Logger: Send + Sync {
	fn log(&self, message: &str) -> String;
}

#[derive(Clone, Debug)]
pub struct DefaultLogger;

impl Logger for DefaultLogger {
	fn log(&self, message: &str) -> String {
		format!("Logger: {message}")
	}
}

impl Injectable for DefaultLogger {
	fn construct(_args: &mut Arguments) -> DiResult<Self> {
		Ok(DefaultLogger)
	}
}

#[derive(Clone, Debug)]
pub struct AnotherLogger;

impl Logger for AnotherLogger {
	fn log(&self, message: &str) -> String {
		format!("AnotherLogger: {message}")
	}
}

impl Injectable for AnotherLogger {
	fn construct(_args: &mut Arguments) -> DiResult<Self> {
		Ok(AnotherLogger)
	}
}

pub fn as_logger<L: Logger + 'static>(logger: L) -> Arc<dyn Logger> {
	Arc::new(logger)
}
