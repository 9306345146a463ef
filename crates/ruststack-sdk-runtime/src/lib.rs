//! Runtime shared by the RustStack AWS SDK service clients.
//!
//! - [`transport`]: the [`HttpTransport`] seam and its `reqwest` implementation.
//! - [`client`]: [`ServiceClient`], which resolves the endpoint, signs and sends.
//! - [`paginator`]: cross-page lazy sequences that follow continuation tokens.
//! - [`waiter`]: the PENDING / SUCCESS / FAILURE polling state machine.
//! - `replay` (feature `test-util`): a scripted transport for tests.

pub mod client;
pub mod paginator;
#[cfg(any(test, feature = "test-util"))]
pub mod replay;
pub mod transport;
pub mod waiter;

pub use client::ServiceClient;
pub use paginator::{PageableResponse, Paginator};
#[cfg(any(test, feature = "test-util"))]
pub use replay::{RecordedRequest, StaticReplayTransport};
pub use transport::{HttpTransport, ReqwestTransport};
pub use waiter::{Waiter, WaiterConfig, WaiterState};
