#![allow(dead_code)]

pub mod mem_store;
pub mod synthetic_image;
