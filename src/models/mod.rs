//! Typed payloads for the FCG backend.
//!
//! The backend speaks camelCase JSON and omits fields freely, so response
//! models keep every field optional. Request payloads (`New*`, `*Update`,
//! `OutgoingMessage`) serialize only the fields that are set.

pub mod call;
pub mod common;
pub mod contact;
pub mod dashboard;
pub mod message;
pub mod push;
pub mod task;

pub use call::CallRecord;
pub use common::Ack;
pub use contact::{Contact, ContactUpdate, NewContact};
pub use dashboard::{ActivityEntry, DashboardStats};
pub use message::{Conversation, Message, OutgoingMessage};
pub use push::{PushKeys, PushSubscription};
pub use task::{NewTask, Task, TaskUpdate, STATUS_DONE};
