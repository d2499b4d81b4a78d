//! amalg-core: the patient seamstress of header amalgamation
//!
//! Takes a tree of interdependent text files and stitches them into one
//! distributable file. Whenever a line carries a local quoted include
//! directive, the referenced file's fully expanded contents are sewn in
//! right there, before the next line of the including file is touched.
//!
//! ## Two Acts of Amalgamation
//!
//! **Matching**: recognizing the one directive form that matters
//! - Line-oriented pattern match, never a language parser
//! - Quoted includes (`#include "..."`) fire; angle brackets pass through
//! - The convention is pluggable for projects with their own spelling
//!
//! **Expansion**: strict pre-order depth-first traversal
//! - Include targets resolve relative to the file they appear in
//! - Every non-directive line is emitted verbatim, newline-terminated
//! - Cycles are caught by tracking the active expansion stack, not by
//!   waiting for the call stack to give out
//!
//! ## A Sample Conversation
//!
//! ```rust,no_run
//! use std::io;
//! use std::path::Path;
//! use amalg_core::expand::Expander;
//!
//! let expander = Expander::new();
//! let stdout = io::stdout();
//! expander.expand(Path::new("include/lib.hpp"), stdout.lock())?;
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Or, to go straight from file to file:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use amalg_core::expand::expand_file;
//!
//! expand_file(
//!     Path::new("include/lib.hpp"),
//!     Path::new("single_include/lib.hpp"),
//! )?;
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## The Cast of Characters
//!
//! - [`directive::IncludeDirective`]: decides which lines are includes
//! - [`expand::Expander`]: walks the include graph and writes the output
//!
//! Failure is always fatal to the run: a missing include target or a
//! cyclic include graph aborts the expansion with an error naming the
//! offending path. No retries, no partial-success mode.

pub mod directive;
pub mod expand;
