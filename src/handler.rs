use crate::event::EmittedEvent;
use crate::Aggregate;

/// This trait is used to implement an `EventHandler`. An event handler is intended to be an entity
/// which performs side effects once an event has been applied to an aggregate.
///
/// All the errors should be handled from within the `EventHandler` and it shouldn't panic: the command
/// has already succeeded when the handler runs.
pub trait EventHandler<A>
where
    A: Aggregate,
{
    /// Handle an event and perform an action.
    fn handle(&self, event: &EmittedEvent<A::Event>);

    /// The name of the event handler. By default, this is the type name of the event handler,
    /// but it can be overridden to provide a custom name. This name is used as
    /// part of tracing spans, to identify the event handler being run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
