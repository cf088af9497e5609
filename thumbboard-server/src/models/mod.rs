//! Request payloads
//!
//! Absent, null, or wrong-typed fields are tolerated rather than rejected.

pub mod payload;

pub use payload::{CreateBoardRequest, CreateThumbnailRequest, UpdateBoardRequest};
