pub mod dto;
pub mod error;
pub mod fallback;
pub mod fingerprint;
pub mod handler;
pub mod query;
pub mod slots;
pub mod status;
pub mod upstream;
