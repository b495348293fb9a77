pub mod api;
pub mod retry;
pub mod storage;
