pub mod hand_context;
pub mod metrics;
pub mod state;

pub use hand_context::HandContext;
pub use metrics::{HandMetrics, HandStage};
pub use state::{ClassifiedState, IngestedState, ProcessingState, SmoothedState};
