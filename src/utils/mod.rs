/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Raise-site helpers
//!
//! Small checks that turn a common failure condition into the matching
//! taxonomy kind, so numerical code does not have to build the failure
//! itself.

pub mod cast;
pub mod file;
pub mod numeric;

pub use cast::{cast_box, cast_mut, cast_ref};
pub use file::{create_file, open_file};
pub use numeric::{check_all_finite, check_finite, check_solver_status};
