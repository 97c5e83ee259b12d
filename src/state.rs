/// Direction of one slider step.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // Head slide moves to the tail
    Backward, // Tail slide moves to the head
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepState {
    Idle,       // No step in flight
    Collapsing, // Original boundary slide is shrinking away
}

/// What happened to a step request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepOutcome {
    Started,
    Queued,  // Held until the in-flight collapse completes
    Ignored, // Nothing to rotate
}
