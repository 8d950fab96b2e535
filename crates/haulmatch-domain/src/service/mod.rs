//! Domain services

pub mod bucket_selector;
pub mod payload_matcher;
pub mod productivity;
pub mod swl_resolver;

pub use bucket_selector::{bucket_load, select_optimal_bucket, CLASS_CEILING_OFFSET};
pub use payload_matcher::{match_payload, PassSearch};
pub use productivity::compute_productivity;
pub use swl_resolver::{find_swl_record, resolve_class, resolve_swl};
