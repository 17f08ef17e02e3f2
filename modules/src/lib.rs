#![no_std]

pub mod errors;
pub mod fund_custody;
pub mod storage_deposit;
pub mod types;
