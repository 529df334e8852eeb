//! Request middleware

pub mod delay;
