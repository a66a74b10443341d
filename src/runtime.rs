//! Wiring for the background panel refresher

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::network::Transport;
use crate::workers::core::EventSender;
use crate::workers::refresher::{PanelRefresher, PanelResult};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Create the refresher together with the channels the UI reads from.
pub fn start_refresher(
    transport: Arc<dyn Transport>,
) -> (PanelRefresher, mpsc::Receiver<PanelResult>, mpsc::Receiver<Event>) {
    let (result_sender, result_receiver) = mpsc::channel::<PanelResult>(EVENT_QUEUE_SIZE);
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let refresher = PanelRefresher::new(transport, result_sender, EventSender::new(event_sender));
    (refresher, result_receiver, event_receiver)
}
