pub mod app;
pub mod call_screen;
pub mod device_selection_screen;
pub mod error_screen;
pub mod idle_screen;
pub mod incoming_call_screen;
pub mod login_screen;
pub mod message_rate_bar;
pub mod screen_controls;
pub mod title_banner;
pub mod working_screen;

pub use app::App;
pub use call_screen::CallScreen;
pub use device_selection_screen::DeviceSelectionScreen;
pub use error_screen::ErrorScreen;
pub use idle_screen::IdleScreen;
pub use incoming_call_screen::IncomingCallScreen;
pub use login_screen::LoginScreen;
pub use message_rate_bar::MessageRateBar;
pub use screen_controls::{ButtonState, ButtonStyle, ScreenControls};
pub use title_banner::TitleBanner;
pub use working_screen::WorkingScreen;
