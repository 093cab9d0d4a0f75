//! Roster loading service.
//!
//! The application's single asynchronous operation: the one-shot fetch from
//! the remote user provider, run via Iced's `Task::perform` pattern. No
//! retry, no cancellation - a failed load leaves the session empty.

use iced::Task;

use crate::message::Message;

/// Fetch the roster from the provider.
///
/// Returns a Task that will produce a `Loaded` message tagged with the
/// generation the fetch was spawned for, so stale results can be discarded.
pub fn load_students(endpoint: String, generation: u64) -> Task<Message> {
    Task::perform(
        async move {
            roster_ingest::fetch_students(&endpoint).await.map_err(|e| {
                tracing::warn!("Roster load failed: {e}");
                e.user_message().to_string()
            })
        },
        move |result| Message::Loaded { generation, result },
    )
}
