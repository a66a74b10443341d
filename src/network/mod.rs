pub mod error;
pub mod poll_timer;
pub mod request;
pub mod transport;

pub use error::FetchError;
pub use poll_timer::{PollTimer, PollTimerConfig};
pub use request::PanelRequest;
pub use transport::{HttpTransport, OfflineTransport, Transport};

#[cfg(test)]
pub use transport::MockTransport;
