use thiserror::Error;

/// Errors raised at the seams between the UI, its gateway and the call engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The gateway loop has stopped and no longer accepts events
    #[error("UI gateway is closed")]
    GatewayClosed,

    /// The call-control engine dropped its end of the action channel
    #[error("call engine disconnected")]
    EngineDisconnected,

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    /// Failure reported by a call engine while handling an action
    #[error("call engine error: {0}")]
    Engine(String),
}

pub type UiResult<T> = std::result::Result<T, UiError>;
