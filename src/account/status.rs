use crate::account::aggregate::AccountAggregate;
use crate::account::event::AccountEvent;
use crate::{EmittedEvent, EventHandler};

/// Reports the human readable status line of every applied event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusReporter;

impl EventHandler<AccountAggregate> for StatusReporter {
    fn handle(&self, event: &EmittedEvent<AccountEvent>) {
        tracing::info!(
            aggregate_id = %event.aggregate_id,
            sequence_number = event.sequence_number,
            "{}",
            event.payload
        );
    }

    fn name(&self) -> &'static str {
        "status_reporter"
    }
}
