//! Frame-pack metadata: the table of contents for the per-frame JSON
//! exports, plus the human-readable index document.

use crate::sanitize_name;
use figtree_analysis::{FrameSet, Section};
use serde::Serialize;

/// One line of the frame table of contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameFileEntry {
    pub id: String,
    pub name: String,
    /// Direct child count.
    pub element_count: usize,
    /// Recursive count including the frame itself.
    pub total_elements: usize,
    /// Filename of the frame's JSON export, relative to the frames dir.
    pub file: String,
}

/// Serialized to frames_metadata.json next to the frame exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramesMetadata {
    pub root_frame: FrameFileEntry,
    pub parent_frames: Vec<FrameFileEntry>,
    pub total_frames: usize,
}

/// Filename a section's JSON export is written under.
pub fn frame_file_name(section: &Section) -> String {
    format!("{}_{}.json", section.id, sanitize_name(&section.name))
}

impl FramesMetadata {
    pub fn from_frame_set(frames: &FrameSet) -> Self {
        let root = &frames.root_frame;
        Self {
            root_frame: FrameFileEntry {
                id: root.id.clone(),
                name: root.name.clone(),
                element_count: root.element_count,
                total_elements: root.total_elements,
                file: "root_frame.json".to_string(),
            },
            parent_frames: frames
                .sections
                .iter()
                .map(|section| FrameFileEntry {
                    id: section.id.clone(),
                    name: section.name.clone(),
                    element_count: section.element_count,
                    total_elements: section.total_elements,
                    file: frame_file_name(section),
                })
                .collect(),
            total_frames: frames.total_frames,
        }
    }
}

/// Render FRAMES_INDEX.md for a metadata table of contents.
pub fn frames_index(metadata: &FramesMetadata) -> String {
    format!(
        "# FRAME INDEX (FIRST-LEVEL PARENT FRAMES)\n\
         \n\
         ## ROOT FRAME\n\
         - **{root_name}**\n\
         \x20 - Direct elements: {root_count}\n\
         \x20 - Total with nested: {root_total}\n\
         \x20 - File: `{root_file}`\n\
         \n\
         ## FIRST-LEVEL PARENT FRAMES ({parents})\n\
         {parent_list}\n\
         \n\
         ## HOW TO USE\n\
         1. Every frame file contains its complete subtree.\n\
         2. Start with root_frame.json for the overall structure.\n\
         3. Then implement the parent frames one by one.\n\
         4. Each JSON file is self-contained; nothing needs to be joined\n\
         \x20  across files.\n\
         \n\
         ## LAYOUT SUMMARY\n\
         The root frame holds {root_total} elements. The first-level parent\n\
         frames split the layout into its main sections.\n",
        root_name = metadata.root_frame.name,
        root_count = metadata.root_frame.element_count,
        root_total = metadata.root_frame.total_elements,
        root_file = metadata.root_frame.file,
        parents = metadata.parent_frames.len(),
        parent_list = format_parent_list(&metadata.parent_frames),
    )
}

fn format_parent_list(frames: &[FrameFileEntry]) -> String {
    if frames.is_empty() {
        return "No first-level frames; the root section carries everything.".to_string();
    }
    let mut lines = Vec::new();
    for frame in frames {
        lines.push(format!("- **{}**", frame.name));
        lines.push(format!("  - ID: `{}`", frame.id));
        lines.push(format!("  - Direct elements: {}", frame.element_count));
        lines.push(format!("  - Total with nested: {}", frame.total_elements));
        lines.push(format!("  - File: `{}`", frame.file));
    }
    lines.join("\n")
}
