//! Remote-sourced dashboard panels with graceful fallback

pub mod data_panel;
pub mod id;
pub mod set;
pub mod state;
pub mod value;

pub use data_panel::{ApplyOutcome, DataPanel, PanelSpec, RefreshTicket};
pub use id::PanelId;
pub use set::{Panel, PanelSet};
pub use state::{FallbackReason, Provenance};
pub use value::{PanelValue, Row, Tone};
