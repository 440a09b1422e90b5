mod filter_builder;
mod identifier_normalizer;
mod query_rewriter;

pub use filter_builder::{FilterBuilder, PROCESS_EVENT_DIRECTORY_URI, PROCESS_ID_FILTER_PART};
pub use identifier_normalizer::IdentifierNormalizer;
pub use query_rewriter::{
    ExpandRequest, QueryRewriter, ARRIVAL_TIMES, PLANT_LOCATION, RECEIVING_LOCATION,
    SUPPLIER_LOCATION,
};
