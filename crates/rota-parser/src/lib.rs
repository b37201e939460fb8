pub mod columns;
pub mod errors;
pub mod ingest;
pub mod model;

pub use errors::{IngestError, RowError};
pub use ingest::{ingest_appointments, IngestBatch};
pub use model::{NormalizedAppointment, RawAppointmentRow};
