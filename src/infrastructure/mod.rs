pub mod aws;
pub mod storage;
pub mod transcoder;
