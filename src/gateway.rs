use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, error, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::actions::{ActionSink, UiAction};
use crate::error::{UiError, UiResult};
use crate::notifications::UiNotification;
use crate::state::{DeviceMap, SessionView};
use crate::store::{UserIntent, ViewStore};

/// Everything the gateway loop consumes, in arrival order
#[derive(Debug)]
enum GatewayEvent {
    Notify(UiNotification),
    User(UserIntent),
    Shutdown,
}

/// Sending side of the gateway queue
///
/// Closing enqueues `Shutdown` under the same lock senders take, so every
/// event is either queued ahead of `Shutdown` and processed, or rejected
/// with [`UiError::GatewayClosed`]. Nothing is dropped silently.
#[derive(Debug, Clone)]
struct EventQueue {
    tx: mpsc::UnboundedSender<GatewayEvent>,
    closed: Arc<Mutex<bool>>,
}

impl EventQueue {
    fn send(&self, event: GatewayEvent) -> UiResult<()> {
        let closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            return Err(UiError::GatewayClosed);
        }
        self.tx.send(event).map_err(|_| UiError::GatewayClosed)
    }

    fn close(&self) {
        let mut closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        if !*closed {
            *closed = true;
            let _ = self.tx.send(GatewayEvent::Shutdown);
        }
    }
}

/// Engine-side handle for pushing notifications into the UI
///
/// Cheap to clone; every clone feeds the same gateway loop.
#[derive(Debug, Clone)]
pub struct UiHandle {
    events: EventQueue,
}

impl UiHandle {
    pub fn notify(&self, notification: UiNotification) -> UiResult<()> {
        self.events.send(GatewayEvent::Notify(notification))
    }

    pub fn go_to_login(&self, reset: bool) -> UiResult<()> {
        self.notify(UiNotification::GoToLogin { reset })
    }

    pub fn go_to_error(&self, message: impl Into<String>, critical: bool) -> UiResult<()> {
        self.notify(UiNotification::GoToError {
            message: message.into(),
            critical,
        })
    }

    pub fn go_to_unrecoverable_error(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(UiNotification::GoToUnrecoverableError {
            message: message.into(),
        })
    }

    pub fn go_to_working(&self, message: impl Into<String>) -> UiResult<()> {
        self.notify(UiNotification::GoToWorking {
            message: message.into(),
        })
    }

    pub fn go_to_idle(&self) -> UiResult<()> {
        self.notify(UiNotification::GoToIdle)
    }

    pub fn go_to_outgoing_call(&self, username: impl Into<String>) -> UiResult<()> {
        self.notify(UiNotification::GoToOutgoingCall {
            username: username.into(),
        })
    }

    pub fn go_to_calling(&self, username: impl Into<String>) -> UiResult<()> {
        self.notify(UiNotification::GoToCalling {
            username: username.into(),
        })
    }

    pub fn go_to_incoming_call(&self, username: impl Into<String>) -> UiResult<()> {
        self.notify(UiNotification::GoToIncomingCall {
            username: username.into(),
        })
    }

    pub fn go_to_established_call(&self) -> UiResult<()> {
        self.notify(UiNotification::GoToEstablishedCall)
    }

    pub fn show_device_selection(
        &self,
        input_devices: DeviceMap,
        output_devices: DeviceMap,
    ) -> UiResult<()> {
        self.notify(UiNotification::ShowDeviceSelection {
            input_devices,
            output_devices,
        })
    }

    pub fn update_message_rate(&self, incoming: u32, outgoing: u32) -> UiResult<()> {
        self.notify(UiNotification::UpdateMessageRate { incoming, outgoing })
    }
}

/// Runs the view store on its own task
///
/// Engine notifications and user input share one queue, so exactly one
/// event mutates the view at a time. Each processed event publishes one
/// snapshot for renderers.
pub struct UiGateway {
    events: EventQueue,
    snapshots: watch::Receiver<SessionView>,
    task: JoinHandle<()>,
}

impl UiGateway {
    /// Start the loop on the current tokio runtime. `sink` receives every outbound action.
    pub fn spawn<S>(sink: S) -> Self
    where
        S: ActionSink + Send + 'static,
    {
        let store = ViewStore::new();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(store.view().clone());

        let task = tokio::spawn(run_loop(store, sink, events_rx, snapshot_tx));

        Self {
            events: EventQueue {
                tx: events_tx,
                closed: Arc::new(Mutex::new(false)),
            },
            snapshots: snapshot_rx,
            task,
        }
    }

    pub fn handle(&self) -> UiHandle {
        UiHandle {
            events: self.events.clone(),
        }
    }

    pub fn submit(&self, intent: UserIntent) -> UiResult<()> {
        self.events.send(GatewayEvent::User(intent))
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.snapshots.clone()
    }

    /// Latest published view
    pub fn snapshot(&self) -> SessionView {
        self.snapshots.borrow().clone()
    }

    /// Stop accepting events. Events queued before this call are still processed;
    /// later ones from any handle fail with [`UiError::GatewayClosed`].
    pub fn close(&self) {
        self.events.close();
    }

    /// [`UiGateway::close`], then wait for the loop to drain and exit
    pub async fn shutdown(self) {
        self.close();
        if let Err(e) = self.task.await {
            error!("UI gateway task failed: {}", e);
        }
    }
}

async fn run_loop<S: ActionSink>(
    mut store: ViewStore,
    sink: S,
    mut events: mpsc::UnboundedReceiver<GatewayEvent>,
    snapshots: watch::Sender<SessionView>,
) {
    info!("UI gateway started");
    if let Err(e) = sink.forward(UiAction::Ready) {
        error!("Failed to announce UI readiness: {}", e);
    }

    while let Some(event) = events.recv().await {
        debug!("UI gateway processing {:?}", event);
        match event {
            GatewayEvent::Notify(notification) => store.apply(notification, &sink),
            GatewayEvent::User(intent) => store.handle_intent(intent, &sink),
            GatewayEvent::Shutdown => break,
        }
        snapshots.send_replace(store.view().clone());
    }

    info!("UI gateway stopped");
}
