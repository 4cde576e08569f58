// Adapters layer: concrete backends for the domain ports.

pub mod storage;
