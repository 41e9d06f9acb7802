#![forbid(unsafe_code)]
//! treeforge: turn a pasted directory-tree listing into real directories and files.

pub mod apply;
pub mod cli;
pub mod input;
pub mod parse;
pub mod render;
