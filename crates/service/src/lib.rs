//! Service layer for the single persisted blob.
//! - Owns the one shared database handle.
//! - Serializes storage access and bounds every call with a timeout.
//! - Maps model/database failures into `ServiceError`.

pub mod errors;
pub mod blob_store;
#[cfg(test)]
pub mod test_support;

pub use blob_store::BlobStore;
