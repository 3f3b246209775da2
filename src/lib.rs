//! View layer of a softphone.
//!
//! The UI mirrors state pushed by an external call-control engine and
//! forwards user actions back to it. It never decides a transition itself.

pub mod actions;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod notifications;
pub mod state;
pub mod store;

pub use actions::{ActionSink, UiAction};
pub use config::{DemoConfig, UiConfig};
pub use engine::{drive_engine, CallEngine, DemoEngine};
pub use error::{UiError, UiResult};
pub use gateway::{UiGateway, UiHandle};
pub use notifications::UiNotification;
pub use state::{Device, DeviceMap, SessionView, UiState};
pub use store::{UserIntent, ViewStore};
