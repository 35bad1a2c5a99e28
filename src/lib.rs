//! # Introduction
//!
//! trigdrill is a single-screen terminal quiz game that drills trigonometric
//! identities: it shows a formula, offers three candidate answers typeset as
//! math, and tracks score while biasing re-presentation toward
//! recently-missed questions.
//!
//! ## Round pipeline
//!
//! ```text
//! Identity table → Selector → Notation renderer → Screens → Event loop
//! ```
//!
//! 1. [`content`] — the fixed identity table the quiz runs over.
//! 2. [`game`] — question selection with recency bias, option building,
//!    judging, score, and the bounded list of missed prompts.
//! 3. [`notation`] — the narrow "notation string + size + color → blittable
//!    block" interface and its Unicode typesetting backend.
//! 4. [`ui`] — ratatui-based screens and the blocking event loop; not part
//!    of the stable library API.
//!
//! All state is process-local and discarded on exit: no persistence, no
//! networking, no configuration files.

pub mod content;
pub mod game;
pub mod notation;
pub mod ui;
