use std::time::Duration;

use softphone_ui::{
    drive_engine, DemoEngine, SessionView, UiConfig, UiGateway, UiState, UserIntent,
};
use tokio::sync::{mpsc, watch};
use tokio::time::timeout;
use tokio_test::assert_ok;

fn start(config: UiConfig) -> (UiGateway, watch::Receiver<SessionView>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let gateway = UiGateway::spawn(action_tx);
    tokio::spawn(drive_engine(
        DemoEngine::new(config.demo.clone()),
        action_rx,
        gateway.handle(),
        Duration::from_secs(3600),
    ));
    let snapshots = gateway.subscribe();
    (gateway, snapshots)
}

async fn wait_for(snapshots: &mut watch::Receiver<SessionView>, state: UiState) -> SessionView {
    timeout(Duration::from_secs(5), async {
        loop {
            {
                let view = snapshots.borrow_and_update();
                if view.state == state {
                    return view.clone();
                }
            }
            snapshots.changed().await.expect("gateway stopped");
        }
    })
    .await
    .unwrap_or_else(|_| panic!("timed out waiting for {state}"))
}

fn instant() -> UiConfig {
    UiConfig::default().with_working_delay(Duration::ZERO)
}

#[tokio::test]
async fn full_session_with_demo_engine() {
    let (gateway, mut snapshots) = start(instant());

    let view = wait_for(&mut snapshots, UiState::Login).await;
    assert!(!view.block_input);

    assert_ok!(gateway.submit(UserIntent::EditLoginUsername("alice".into())));
    assert_ok!(gateway.submit(UserIntent::EditLoginBootstrap("192.168.1.10:4000".into())));
    assert_ok!(gateway.submit(UserIntent::Login));

    let view = wait_for(&mut snapshots, UiState::ActiveIdle).await;
    assert_eq!(view.login_username, "alice");
    assert!(!view.block_input);

    assert_ok!(gateway.submit(UserIntent::ResetDevices));
    let view = wait_for(&mut snapshots, UiState::DeviceSelection).await;
    assert_eq!(view.selected_input_device.as_deref(), Some("100"));
    assert_eq!(view.selected_output_device.as_deref(), Some("0"));

    assert_ok!(gateway.submit(UserIntent::SelectOutputDevice("15".into())));
    assert_ok!(gateway.submit(UserIntent::ConfirmDevices));
    let view = wait_for(&mut snapshots, UiState::ActiveIdle).await;
    assert_eq!(view.selected_output_device.as_deref(), Some("15"));

    assert_ok!(gateway.submit(UserIntent::EditCallUsername("bob".into())));
    assert_ok!(gateway.submit(UserIntent::Call));
    let view = wait_for(&mut snapshots, UiState::ActiveCall).await;
    assert_eq!(view.call_username.as_deref(), Some("bob"));
    assert!(!view.block_input);

    assert_ok!(gateway.submit(UserIntent::HangupCall));
    wait_for(&mut snapshots, UiState::ActiveIdle).await;

    assert_ok!(gateway.submit(UserIntent::Logout));
    let view = wait_for(&mut snapshots, UiState::Login).await;
    assert_eq!(view.login_username, "");
    assert_eq!(view.login_bootstrap, "");

    gateway.shutdown().await;
}

#[tokio::test]
async fn unreachable_peer_error_is_acknowledged_back_to_login() {
    let (gateway, mut snapshots) = start(instant().with_unreachable_peer("mallory"));
    wait_for(&mut snapshots, UiState::Login).await;

    assert_ok!(gateway.submit(UserIntent::EditLoginUsername("alice".into())));
    assert_ok!(gateway.submit(UserIntent::Login));
    wait_for(&mut snapshots, UiState::ActiveIdle).await;

    assert_ok!(gateway.submit(UserIntent::EditCallUsername("mallory".into())));
    assert_ok!(gateway.submit(UserIntent::Call));
    let view = wait_for(&mut snapshots, UiState::Error).await;
    assert_eq!(view.error_message, "Unable to reach mallory");
    assert!(!view.error_critical);

    assert_ok!(gateway.submit(UserIntent::AcknowledgeError));
    let view = wait_for(&mut snapshots, UiState::Login).await;
    assert_eq!(view.login_username, "alice");

    gateway.shutdown().await;
}

#[tokio::test]
async fn blank_username_returns_to_login_after_acknowledge() {
    let (gateway, mut snapshots) = start(instant());
    wait_for(&mut snapshots, UiState::Login).await;

    assert_ok!(gateway.submit(UserIntent::Login));
    let view = wait_for(&mut snapshots, UiState::Error).await;
    assert_eq!(view.error_message, "A username is required");

    assert_ok!(gateway.submit(UserIntent::AcknowledgeError));
    wait_for(&mut snapshots, UiState::Login).await;

    gateway.shutdown().await;
}

#[tokio::test]
async fn engine_pushes_message_rates() {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let gateway = UiGateway::spawn(action_tx);
    let mut snapshots = gateway.subscribe();
    tokio::spawn(drive_engine(
        DemoEngine::new(instant().demo),
        action_rx,
        gateway.handle(),
        Duration::from_millis(20),
    ));

    let view = timeout(Duration::from_secs(5), async {
        loop {
            snapshots.changed().await.expect("gateway stopped");
            let view = snapshots.borrow_and_update().clone();
            if view.in_message_rate > 0 {
                return view;
            }
        }
    })
    .await
    .expect("no message rate arrived");

    // The Ready announcement is the one action seen so far
    assert_eq!(view.in_message_rate, 1);
    assert_eq!(view.out_message_rate, 1);

    gateway.shutdown().await;
}
