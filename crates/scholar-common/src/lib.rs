//! Shared plumbing for the ScholarAI client workspace.

pub mod logging;
