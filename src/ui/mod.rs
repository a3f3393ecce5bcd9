// src/ui/mod.rs
pub mod deal_form;
pub mod result;
