//! Wire types shared by the log console frontend and the log API backend.

pub mod domain;
