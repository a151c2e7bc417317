// Domain layer: the immutable record types. Depends only on serde, chrono and the error/validation utils.

pub mod model;
