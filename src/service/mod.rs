//! Tower service layer for the exchange protocol

pub mod core;
pub mod request;
pub mod response;

pub use self::core::ExchangeService;
pub use request::{ExchangeRequest, RequestContext};
pub use response::ExchangeResponse;
