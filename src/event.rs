/// Control whether an event will continue propagating or whether it should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    /// Stop event propagation and mark the event as processed
    Stop,
    /// Let event propagation continue
    Continue,
}

impl EventPropagation {
    pub fn is_continue(&self) -> bool {
        matches!(self, EventPropagation::Continue)
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, EventPropagation::Stop)
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, EventPropagation::Stop)
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone)]
pub enum EventListener {
    /// Receives [`Event::Tap`]
    Tap,
    /// Receives [`Event::TextInput`]
    TextInput,
    /// Receives [`Event::SelectSegment`]
    SelectSegment,
}

/// Synthetic user input delivered to a view and bubbled to its ancestors.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A touch-up-inside on the target.
    Tap,
    /// The full contents of a text field after an edit.
    TextInput(String),
    /// The user picked the segment at this index.
    SelectSegment(usize),
}

impl Event {
    pub fn listener(&self) -> EventListener {
        match self {
            Event::Tap => EventListener::Tap,
            Event::TextInput(_) => EventListener::TextInput,
            Event::SelectSegment(_) => EventListener::SelectSegment,
        }
    }
}

pub type EventCallback = dyn Fn(&Event) -> EventPropagation;
