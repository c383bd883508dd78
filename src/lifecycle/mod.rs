pub mod clock;
pub mod manager;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use manager::{plan_update, LifecycleError, ThesisPatch, UpdateRequest};
pub use status::{ParseStatusError, ThesisStatus};
