pub mod collate;
pub mod facets;
pub mod pipeline;
pub mod selection;

pub use facets::extract_facets;
pub use pipeline::{TOP_N_LIMIT, apply, filtered_count};
pub use selection::SelectionState;
