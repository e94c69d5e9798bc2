//! Client view layer for the price list: a persisted session context, a typed
//! HTTP client for the REST API, and one state machine per screen.

pub mod api;
pub mod error;
pub mod language;
pub mod session;
pub mod views;

pub use self::api::{DynPricelistApi, HttpApiClient, PricelistApi};
pub use self::error::ClientError;
pub use self::language::Language;
pub use self::session::{
    DynSessionStore, FileSessionStore, MemorySessionStore, Session, SessionContext, SessionStore,
};
