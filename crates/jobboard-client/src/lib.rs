#![allow(non_snake_case)]

pub mod error;
pub mod identity;
pub mod postings;

pub use error::{FetchError, IdentityError};
pub use identity::{IdentityClient, IdentityConfig};
pub use postings::PostingsClient;
