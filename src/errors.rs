//! Error types for maze construction and grid queries.
//!
//! `error_chain!` creates the `Error`, `ErrorKind`, `ResultExt` and `Result` types.
//! Other modules `use crate::errors::*;` to get hold of them.
#![allow(deprecated)] // error_chain still implements `Error::description`

use error_chain::*;

error_chain! {
    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("maze dimensions must be at least 1x1")
            display("invalid maze dimensions {}x{}: width and height must be at least 1 and their product must fit in memory",
                    width, height)
        }

        OutOfBounds(x: usize, y: usize, width: usize, height: usize) {
            description("tile coordinate outside of the grid")
            display("tile ({}, {}) is outside of the {}x{} grid", x, y, width, height)
        }

        UnknownOrientation(name: String) {
            description("unknown split orientation")
            display("unknown split orientation '{}', expected 'vertical' or 'horizontal'", name)
        }
    }
}
