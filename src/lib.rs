//! Typed Rust client for the SuperSMS verification HTTP API.
//!
//! The crate is split into a domain layer of plain request/response types, a
//! transport layer for query encoding and JSON decoding, and a small client
//! layer issuing the GET requests. Enable the `blocking` feature for a
//! synchronous client in [`blocking`].
//!
//! ```rust,no_run
//! use supersms::{ANY, GetCode, GetNumber, SuperSmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), supersms::SuperSmsError> {
//!     let client = SuperSmsClient::new("...");
//!     let number = client.get_number(GetNumber::new(ANY, ANY, "p1")).await?;
//!     println!("number: {:?}", number.phone);
//!     let code = client.get_code(GetCode::new(42)).await?;
//!     println!("code: {:?}", code.code);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

#[cfg(feature = "blocking")]
pub use client::blocking;
pub use client::{DEFAULT_BASE_URL, SuperSmsClient, SuperSmsClientBuilder, SuperSmsError};
pub use domain::{
    ANY, ApiKey, CodeDetail, ExtraFields, GetCode, GetNumber, NumberDetail, Phone, Referral,
    ReleaseDetail, ReleaseNumber, Selector, TaskId,
};

/// Version of this client crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
