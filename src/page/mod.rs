//! Host page model
//!
//! The recorder is bound to a page that provides:
//! - a start button (`#start-working-button`)
//! - stop buttons (`#stop-working-button`) carrying `data-task-id`
//! - a csrf token and a way to reload

mod element;
mod host;

pub use element::{ClickEvent, Element, START_BUTTON_ID, STOP_BUTTON_ID, TASK_ID_ATTR};
pub use host::{ConsolePage, HostPage};
