//! Testing utilities: a controllable `ResponseSource` for tests that should
//! not touch the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use locate_core::testing::MockResponseSource;
//!
//! let source = MockResponseSource::new();
//! source.set_page("123456789", "<table>...</table>").await;
//! source.set_error("987654321", FetchError::Timeout).await;
//!
//! let lookup = TicketLookup::new(Arc::new(source));
//! ```

mod mock_source;

pub use mock_source::MockResponseSource;
