// Adapters layer: concrete implementations for external systems (filesystem, output file).

pub mod storage;
pub mod writer;
