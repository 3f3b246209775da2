use std::time::Duration;

use async_trait::async_trait;
use log::{error, info, warn};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::actions::UiAction;
use crate::config::DemoConfig;
use crate::error::{UiError, UiResult};
use crate::gateway::UiHandle;
use crate::notifications::UiNotification;

/// Call-control engine behind the UI
///
/// Receives every forwarded action and answers, when it wants to, by
/// pushing notifications through the [`UiHandle`].
#[async_trait]
pub trait CallEngine: Send {
    async fn on_action(&mut self, action: UiAction, ui: &UiHandle) -> UiResult<()>;

    /// Incoming/outgoing message rates since the previous sample
    fn message_rates(&mut self) -> Option<(u32, u32)> {
        None
    }
}

/// Feed forwarded actions to `engine` until either side goes away
///
/// Message rates are sampled every `rate_interval`. An engine failure is
/// shown to the user as a recoverable error.
pub async fn drive_engine<E: CallEngine>(
    mut engine: E,
    mut actions: mpsc::UnboundedReceiver<UiAction>,
    ui: UiHandle,
    rate_interval: Duration,
) {
    let mut ticker = tokio::time::interval(rate_interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            action = actions.recv() => {
                let Some(action) = action else {
                    info!("Action channel closed, stopping engine");
                    break;
                };
                match engine.on_action(action, &ui).await {
                    Ok(()) => {}
                    Err(UiError::GatewayClosed) => {
                        info!("UI gateway closed, stopping engine");
                        break;
                    }
                    Err(e) => {
                        error!("Engine failed to handle action: {}", e);
                        if ui.go_to_error(e.to_string(), false).is_err() {
                            break;
                        }
                    }
                }
            }
            _ = ticker.tick() => {
                if let Some((incoming, outgoing)) = engine.message_rates() {
                    if ui.update_message_rate(incoming, outgoing).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

/// Scripted engine that walks the UI through a plausible session
pub struct DemoEngine {
    config: DemoConfig,
    chosen_devices: Option<(Option<String>, Option<String>)>,
    received: u32,
    sent: u32,
}

impl DemoEngine {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            chosen_devices: None,
            received: 0,
            sent: 0,
        }
    }

    /// Devices most recently reported by the UI
    pub fn chosen_devices(&self) -> Option<&(Option<String>, Option<String>)> {
        self.chosen_devices.as_ref()
    }

    fn send(&mut self, ui: &UiHandle, notification: UiNotification) -> UiResult<()> {
        self.sent = self.sent.saturating_add(1);
        ui.notify(notification)
    }

    async fn pause(&self) {
        if !self.config.working_delay.is_zero() {
            tokio::time::sleep(self.config.working_delay).await;
        }
    }

    fn device_selection(&self) -> UiNotification {
        UiNotification::ShowDeviceSelection {
            input_devices: self.config.input_devices.clone(),
            output_devices: self.config.output_devices.clone(),
        }
    }

    async fn place_call(&mut self, ui: &UiHandle, username: Option<String>) -> UiResult<()> {
        let Some(username) = username.filter(|u| !u.trim().is_empty()) else {
            return self.send(
                ui,
                UiNotification::GoToError {
                    message: "No user to call".to_string(),
                    critical: false,
                },
            );
        };

        self.send(ui, UiNotification::GoToCalling { username: username.clone() })?;
        self.pause().await;

        if self.config.unreachable_peer.as_deref() == Some(username.as_str()) {
            warn!("Demo peer {} is unreachable", username);
            return self.send(
                ui,
                UiNotification::GoToError {
                    message: format!("Unable to reach {}", username),
                    critical: false,
                },
            );
        }

        self.send(ui, UiNotification::GoToOutgoingCall { username })?;
        self.pause().await;
        self.send(ui, UiNotification::GoToEstablishedCall)
    }
}

#[async_trait]
impl CallEngine for DemoEngine {
    async fn on_action(&mut self, action: UiAction, ui: &UiHandle) -> UiResult<()> {
        self.received = self.received.saturating_add(1);
        info!("Demo engine handling {:?}", action);

        match action {
            UiAction::Ready => self.send(ui, UiNotification::GoToLogin { reset: false }),
            UiAction::Login { username, bootstrap } => {
                self.send(
                    ui,
                    UiNotification::GoToWorking {
                        message: "Logging in...".to_string(),
                    },
                )?;
                self.pause().await;

                if username.trim().is_empty() {
                    return self.send(
                        ui,
                        UiNotification::GoToError {
                            message: "A username is required".to_string(),
                            critical: false,
                        },
                    );
                }

                info!("Demo login for {} via {:?}", username, bootstrap);
                self.send(ui, UiNotification::GoToIdle)
            }
            UiAction::Logout => {
                self.send(
                    ui,
                    UiNotification::GoToWorking {
                        message: "Logging out...".to_string(),
                    },
                )?;
                self.pause().await;
                self.send(ui, UiNotification::GoToLogin { reset: true })
            }
            UiAction::ResetDevices => {
                let selection = self.device_selection();
                self.send(ui, selection)
            }
            UiAction::ChooseDevices { input_id, output_id } => {
                info!("Demo devices chosen: {:?} / {:?}", input_id, output_id);
                self.chosen_devices = Some((input_id, output_id));
                Ok(())
            }
            UiAction::DevicesChosen => {
                if self.chosen_devices.is_none() {
                    return Err(UiError::Engine("no devices selected".to_string()));
                }
                self.send(ui, UiNotification::GoToIdle)
            }
            UiAction::Call { username } => self.place_call(ui, username).await,
            UiAction::AcceptIncomingCall => self.send(ui, UiNotification::GoToEstablishedCall),
            UiAction::RejectIncomingCall | UiAction::HangupCall => {
                self.send(ui, UiNotification::GoToIdle)
            }
            UiAction::ErrorAcknowledged => self.send(ui, UiNotification::GoToLogin { reset: false }),
        }
    }

    fn message_rates(&mut self) -> Option<(u32, u32)> {
        let rates = (self.received, self.sent);
        self.received = 0;
        self.sent = 0;
        Some(rates)
    }
}
