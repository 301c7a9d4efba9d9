//! Application services.

mod container;

pub use container::{ServiceContainer, Services};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
