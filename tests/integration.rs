//! Integration tests for the portfolio TUI
//!
//! These tests drive the public crate API with synthetic time: no
//! terminal, no sleeping, every animator polled at explicit instants.

mod common;

mod integration {
    pub mod content;
    pub mod reveal;
    pub mod typing;
    pub mod workflow;
}
