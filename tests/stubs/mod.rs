#![allow(dead_code)]
// Each integration test binary uses its own subset of these

pub mod fixtures;
pub mod flaky;
