pub mod error;
pub mod fetch;
pub mod snapshot;
pub mod wire;

pub use error::{IngestError, Result};
pub use fetch::{DEFAULT_BASE_URL, fetch_countries};
pub use snapshot::{Snapshot, load_dataset, read_snapshot, write_snapshot};
