//! Resume document model.
//!
//! This module defines the content side of a resume: header fields, summary
//! and ordered sections of entries. The model is pure data and carries no
//! styling; the renderer maps it onto document primitives.

mod document;
mod section;

pub use document::{DocumentProperties, ResumeBuilder, ResumeDocument};
pub use section::{EducationEntry, Entry, JobEntry, Section, SkillGroup};
