use mentorship_sdk::MentorshipEvent;

/// Outbound port for state-change events. Publishing is fire-and-forget;
/// a failing subscriber must never fail the operation that emitted it.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: &MentorshipEvent);
}

/// Publisher that logs events through `tracing`. Default wiring when no
/// collaborator subscribes.
pub struct TracingEventPublisher;

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: &MentorshipEvent) {
        tracing::info!(?event, "mentorship event");
    }
}
