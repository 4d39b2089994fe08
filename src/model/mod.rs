pub mod metrics;
pub mod record;
pub mod table;

pub use metrics::{AreaBreakdown, Metrics, StatusCounts};
pub use record::{Area, NewRecord, ProjectRecord, RecordEdit, RecordId, Status};
pub use table::Table;
