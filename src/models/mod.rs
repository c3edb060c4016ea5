pub mod payload;
pub mod record;

pub use payload::{StressPayload, StressValue};
pub use record::{Emotion, StressRecord, StressSeries, DATE_FORMAT};
