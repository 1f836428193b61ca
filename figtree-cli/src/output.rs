//! Writes one analysis run to disk: the full analysis document, the
//! per-frame exports with their index, and the prompt pack.

use figtree_analysis::{AnalysisResult, FrameSet};
use figtree_prompts::frames::{frame_file_name, frames_index, FramesMetadata};
use figtree_prompts::PromptDoc;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const ANALYSIS_FILE: &str = "complete_analysis_full.json";
const FRAMES_DIR: &str = "frames";
const PROMPTS_DIR: &str = "smart_prompts";
const METADATA_FILE: &str = "frames_metadata.json";
const INDEX_FILE: &str = "FRAMES_INDEX.md";

#[derive(Debug)]
pub enum OutputError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
            OutputError::Json(err) => write!(f, "cannot serialize output: {}", err),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io { source, .. } => Some(source),
            OutputError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        OutputError::Json(err)
    }
}

/// Serialize the complete analysis document.
pub fn write_analysis(out_dir: &Path, analysis: &AnalysisResult) -> Result<(), OutputError> {
    write_json(&out_dir.join(ANALYSIS_FILE), analysis)
}

/// Export every frame as its own self-contained JSON file, then the
/// metadata table of contents and the Markdown index.
pub fn write_frames(out_dir: &Path, frames: &FrameSet) -> Result<(), OutputError> {
    let frames_dir = out_dir.join(FRAMES_DIR);

    write_json(&frames_dir.join("root_frame.json"), &frames.root_frame)?;
    for section in &frames.sections {
        write_json(&frames_dir.join(frame_file_name(section)), section)?;
    }

    let metadata = FramesMetadata::from_frame_set(frames);
    write_json(&out_dir.join(METADATA_FILE), &metadata)?;
    write_text(&frames_dir.join(INDEX_FILE), &frames_index(&metadata))?;

    info!(
        frames = frames.total_frames,
        dir = %frames_dir.display(),
        "frame exports written"
    );
    Ok(())
}

/// Write the prompt pack under `smart_prompts/`, preserving each
/// document's relative path.
pub fn write_prompts(out_dir: &Path, docs: &[PromptDoc]) -> Result<(), OutputError> {
    let prompts_dir = out_dir.join(PROMPTS_DIR);
    for doc in docs {
        write_text(&prompts_dir.join(&doc.path), &doc.content)?;
    }
    info!(
        documents = docs.len(),
        dir = %prompts_dir.display(),
        "prompt pack written"
    );
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), OutputError> {
    let body = serde_json::to_string_pretty(value)?;
    write_text(path, &body)
}

fn write_text(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtree_analysis::schema::RawNode;
    use figtree_analysis::{analyze_node, partition, Element};

    fn sample_analysis() -> AnalysisResult {
        analyze_node(&RawNode {
            name: "page".to_string(),
            node_type: "FRAME".to_string(),
            children: vec![RawNode {
                name: "hero".to_string(),
                node_type: "FRAME".to_string(),
                ..RawNode::default()
            }],
            ..RawNode::default()
        })
    }

    #[test]
    fn frame_exports_land_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = sample_analysis();
        let root = analysis
            .target_node
            .as_ref()
            .and_then(Element::as_node)
            .unwrap();
        let frames = partition(root, &analysis.design_tokens);

        write_analysis(dir.path(), &analysis).unwrap();
        write_frames(dir.path(), &frames).unwrap();

        assert!(dir.path().join(ANALYSIS_FILE).is_file());
        assert!(dir.path().join("frames/root_frame.json").is_file());
        assert!(dir.path().join("frames/root_hero.json").is_file());
        assert!(dir.path().join(METADATA_FILE).is_file());
        let index = fs::read_to_string(dir.path().join("frames/FRAMES_INDEX.md")).unwrap();
        assert!(index.contains("- **hero**"));
    }

    #[test]
    fn prompt_paths_keep_their_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let docs = vec![
            PromptDoc::new("main_structure.txt", "overview"),
            PromptDoc::new("levels/level_0.txt", "level zero"),
        ];
        write_prompts(dir.path(), &docs).unwrap();
        assert!(dir.path().join("smart_prompts/main_structure.txt").is_file());
        assert!(dir.path().join("smart_prompts/levels/level_0.txt").is_file());
    }
}
