pub mod profile_store_memory;

pub use profile_store_memory::ProfileStoreMemory;
