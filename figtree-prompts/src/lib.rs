//! Prompt-document rendering.
//!
//! Turns an [`AnalysisResult`](figtree_analysis::AnalysisResult) and a
//! [`FrameSet`](figtree_analysis::FrameSet) into a pack of plain-text
//! documents meant to be fed, one at a time, to a downstream
//! code-generation agent. Pure string formatting: nothing here touches the
//! network or the filesystem.

pub mod components;
pub mod design;
pub mod frames;
pub mod levels;
pub mod structure;
pub mod types;

mod render;

use figtree_analysis::{AnalysisResult, FrameSet};

/// One rendered document and where it belongs inside the prompt pack.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptDoc {
    /// Path relative to the prompt pack root, `/`-separated.
    pub path: String,
    pub content: String,
}

impl PromptDoc {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Render the full prompt pack.
pub fn generate(analysis: &AnalysisResult, frames: &FrameSet) -> Vec<PromptDoc> {
    let mut docs = Vec::new();
    docs.push(PromptDoc::new(
        "main_structure.txt",
        structure::main_structure(analysis),
    ));
    docs.extend(levels::level_docs(analysis));
    docs.extend(types::type_docs(analysis));
    docs.push(PromptDoc::new(
        "design_tokens.txt",
        design::design_system(&analysis.design_tokens),
    ));
    docs.extend(components::component_docs(analysis));
    docs.push(PromptDoc::new(
        "SMART_INSTRUCTIONS.md",
        structure::instructions(analysis, frames),
    ));
    docs
}

/// Reduce a display name to a filename-safe stem: lowercase, every
/// non-alphanumeric replaced with `_`, capped at 30 characters.
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(30)
        .collect()
}
