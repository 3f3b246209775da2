use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{error, info};
use tokio::sync::mpsc;

use super::{
    CallScreen, DeviceSelectionScreen, ErrorScreen, IdleScreen, IncomingCallScreen, LoginScreen,
    MessageRateBar, ScreenControls, TitleBanner, WorkingScreen,
};
use crate::config::UiConfig;
use crate::engine::{drive_engine, DemoEngine};
use crate::gateway::UiGateway;
use crate::state::{SessionView, UiState};
use crate::store::UserIntent;

pub fn App() -> Element {
    let config = use_hook(UiConfig::current);
    let mut view = use_signal(SessionView::default);

    // Owns the gateway and the engine. Screens send UserIntents here; every
    // snapshot the gateway publishes replaces the rendered view in one go.
    use_coroutine({
        let demo = config.demo.clone();
        move |mut intents: UnboundedReceiver<UserIntent>| {
            let demo = demo.clone();
            async move {
                let (action_tx, action_rx) = mpsc::unbounded_channel();
                let gateway = UiGateway::spawn(action_tx);
                let rate_interval = demo.rate_interval;
                tokio::spawn(drive_engine(
                    DemoEngine::new(demo),
                    action_rx,
                    gateway.handle(),
                    rate_interval,
                ));
                let mut snapshots = gateway.subscribe();

                loop {
                    tokio::select! {
                        Some(intent) = intents.next() => {
                            if let Err(e) = gateway.submit(intent) {
                                error!("Failed to submit user input: {}", e);
                                break;
                            }
                        }
                        changed = snapshots.changed() => {
                            if changed.is_err() {
                                break;
                            }
                            let snapshot = snapshots.borrow_and_update().clone();
                            view.set(snapshot);
                        }
                    }
                }

                info!("UI coroutine finished");
                gateway.shutdown().await;
            }
        }
    });

    let snapshot = view.read().clone();
    let controls = ScreenControls::for_view(&snapshot);
    let peer = snapshot.call_username.clone().unwrap_or_default();

    let screen = match snapshot.state {
        UiState::Login => rsx! {
            LoginScreen {
                username: snapshot.login_username.clone(),
                bootstrap: snapshot.login_bootstrap.clone(),
                controls: controls.clone(),
            }
        },
        UiState::Working => rsx! {
            WorkingScreen { message: snapshot.working_message.clone() }
        },
        UiState::Error => rsx! {
            ErrorScreen {
                message: snapshot.error_message.clone(),
                critical: snapshot.error_critical,
                controls: controls.clone(),
            }
        },
        UiState::UnrecoverableError => rsx! {
            ErrorScreen {
                message: snapshot.unrecoverable_error_message.clone(),
                critical: true,
                controls: controls.clone(),
            }
        },
        UiState::DeviceSelection => rsx! {
            DeviceSelectionScreen {
                input_devices: snapshot.input_devices.clone(),
                output_devices: snapshot.output_devices.clone(),
                selected_input: snapshot.selected_input_device.clone(),
                selected_output: snapshot.selected_output_device.clone(),
                controls: controls.clone(),
            }
        },
        UiState::ActiveIdle => rsx! {
            IdleScreen {
                username: snapshot.login_username.clone(),
                call_target: peer,
                controls: controls.clone(),
            }
        },
        UiState::ActiveIncomingCall => rsx! {
            IncomingCallScreen { caller: peer, controls: controls.clone() }
        },
        UiState::ActiveOutgoingCalling | UiState::ActiveOutgoingCall | UiState::ActiveCall => rsx! {
            CallScreen {
                peer,
                state: snapshot.state,
                entered_at: snapshot.state_entered_at,
                controls: controls.clone(),
            }
        },
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 pb-6",
            TitleBanner { title: config.window_title.clone() }
            div {
                class: "max-w-xl mx-auto px-4 flex flex-col gap-6",
                {screen}
                MessageRateBar {
                    incoming: snapshot.in_message_rate,
                    outgoing: snapshot.out_message_rate,
                }
            }
        }
    }
}
