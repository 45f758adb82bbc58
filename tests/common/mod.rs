#![allow(dead_code)]

pub mod fake_wordpress;
pub mod fixtures;
