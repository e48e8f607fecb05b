// src/handlers/mod.rs

pub mod errors;
pub mod home;
pub mod questions;
