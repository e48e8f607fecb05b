// src/models/mod.rs

pub mod question;
