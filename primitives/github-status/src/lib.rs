//! GitHub Status - `changeUserStatus` Mutation Invoker
//!
//! Sends one fixed GraphQL mutation to the GitHub GraphQL API and hands the
//! parsed JSON response to an [`OutputSink`]. Failures of any kind are caught
//! once and handed to the same sink's error channel.
//!
//! # Usage
//!
//! ```no_run
//! use github_status::{ConsoleSink, MutationRequest, send_status_mutation};
//!
//! # async fn run() -> Result<(), github_status::InvokeError> {
//! let client = reqwest::Client::new();
//! let request = MutationRequest::new(
//!     github_status::DEFAULT_ENDPOINT,
//!     github_status::PLACEHOLDER_TOKEN,
//! )?;
//! send_status_mutation(&client, &request, &ConsoleSink::stdio(false)).await;
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod error;
pub mod invoker;
pub mod mutation;
pub mod sink;

pub use alert::{CONFIRMATION_MESSAGE, my_alert};
pub use error::InvokeError;
pub use invoker::{invoke, send_status_mutation};
pub use mutation::{CHANGE_USER_STATUS, DEFAULT_ENDPOINT, MutationRequest, PLACEHOLDER_TOKEN};
pub use sink::{ConsoleSink, OutputSink};
