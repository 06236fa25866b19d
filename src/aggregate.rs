use crate::event::Event;

/// The `Aggregate` trait is responsible for validating commands, mapping commands to events, and applying
/// events onto the state.
///
/// An Aggregate should be able to derive its own state from nothing but its initial configuration and its
/// event stream. Applying the same events, in the same order, to the same aggregate, should always yield an
/// identical aggregate state.
///
/// This trait is purposefully _synchronous_. If you are implementing this trait, make sure to not perform
/// any side effect inside `handle_command` or `apply_event`: side effects belong to an
/// [`crate::handler::EventHandler`].
pub trait Aggregate {
    /// Name of the aggregate, used in tracing spans.
    const NAME: &'static str;

    /// Internal aggregate state. This will be wrapped in [`crate::AggregateState`] and could be used to
    /// validate commands.
    type State: Default + Clone;

    /// A command is an action that the caller can execute over an aggregate in order to let it emit an event.
    type Command;

    /// An event represents a fact that took place in the domain. They are the source of truth; your current
    /// state is derived from the events.
    type Event: Event;

    /// This associated type is used to get domain errors while handling a command.
    type Error: std::error::Error;

    /// Handles, validates a command and emits events.
    ///
    /// If the command is rejected no event must be emitted and the state is left untouched.
    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Updates the aggregate state using the new event. This assumes that the event can be correctly applied
    /// to the state.
    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State;
}
