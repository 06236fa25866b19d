use chrono::Utc;
use uuid::Uuid;

use crate::event::EmittedEvent;
use crate::handler::EventHandler;
use crate::{Aggregate, AggregateState};

/// The AggregateManager is responsible for coupling the Aggregate with its event handlers, so that the
/// events are applied onto the state when a command is handled and every registered handler is notified.
///
/// Nothing is persisted: the emitted events are handed back to the caller and then forgotten.
pub struct AggregateManager<A>
where
    A: Aggregate,
{
    event_handlers: Vec<Box<dyn EventHandler<A>>>,
}

impl<A> Default for AggregateManager<A>
where
    A: Aggregate,
{
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<A> AggregateManager<A>
where
    A: Aggregate,
{
    /// Creates a new instance of an [`AggregateManager`].
    pub fn new(event_handlers: Vec<Box<dyn EventHandler<A>>>) -> Self {
        Self { event_handlers }
    }

    /// Registers one more event handler. Handlers are run in registration order.
    pub fn add_event_handler(&mut self, event_handler: impl EventHandler<A> + 'static) {
        self.event_handlers.push(Box::new(event_handler));
    }

    /// Validates and handles the command onto the given state, then applies the resulting events in order
    /// and passes each of them to the event handlers.
    ///
    /// If the aggregate rejects the command the state is left untouched and no handler runs.
    #[tracing::instrument(skip_all, fields(aggregate = A::NAME, aggregate_id = %aggregate_state.id()))]
    pub fn handle_command(
        &self,
        aggregate_state: &mut AggregateState<A::State>,
        command: A::Command,
    ) -> Result<Vec<EmittedEvent<A::Event>>, A::Error> {
        let events: Vec<A::Event> = match A::handle_command(aggregate_state.inner(), command) {
            Ok(events) => events,
            Err(error) => {
                tracing::debug!(error = %error, "command rejected");
                return Err(error);
            }
        };

        let aggregate_id: Uuid = *aggregate_state.id();
        let occurred_on = Utc::now();
        let mut emitted_events: Vec<EmittedEvent<A::Event>> = Vec::with_capacity(events.len());

        for event in events {
            let sequence_number = aggregate_state.next_sequence_number();
            aggregate_state.apply(|state| A::apply_event(state, event.clone()));

            emitted_events.push(EmittedEvent {
                id: Uuid::new_v4(),
                aggregate_id,
                payload: event,
                occurred_on,
                sequence_number,
            });
        }

        for emitted_event in &emitted_events {
            for event_handler in &self.event_handlers {
                let span = tracing::debug_span!(
                    "account.event_handler",
                    event_id = %emitted_event.id,
                    aggregate_id = %emitted_event.aggregate_id,
                    event_handler = event_handler.name()
                );
                let _e = span.enter();

                event_handler.handle(emitted_event);
            }
        }

        Ok(emitted_events)
    }
}
