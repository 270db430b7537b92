//! Rendering module for turning resumes into documents.

mod json;
mod result;
mod resume;
pub mod style;
mod text;

pub use json::{from_json, from_json_file, to_json, JsonFormat};
pub use result::{RenderResult, RenderStats};
pub use resume::{to_layout, ResumeRenderer, IN_PROGRESS_SUFFIX};
pub use style::{ColorScheme, FontSizes, Fonts, Spacing, StyleConfig};
pub use text::{to_text, to_text_with_width, DEFAULT_TEXT_WIDTH};
