//! Some tools around degrees

pub mod degrees;
