//! Parsing of `analyze` input documents.

use serde::Deserialize;
use wayfarer_core::EmotionReading;

/// Accepted input shapes:
///
/// - `{"faces": [...], "primaryIndex": 1}`
/// - `[{...}, {...}]` (primary index from the command line)
/// - `{...}` (a single face)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Request {
        faces: Vec<EmotionReading>,
        #[serde(rename = "primaryIndex")]
        primary_index: Option<usize>,
    },
    Many(Vec<EmotionReading>),
    One(EmotionReading),
}

/// Faces to analyze plus the primary index, if the document carried one.
#[derive(Debug)]
pub struct FacesInput {
    pub faces: Vec<EmotionReading>,
    pub primary_index: Option<usize>,
}

pub fn parse(src: &str) -> Result<FacesInput, serde_json::Error> {
    let doc: Document = serde_json::from_str(src)?;
    Ok(match doc {
        Document::Request {
            faces,
            primary_index,
        } => FacesInput {
            faces,
            primary_index,
        },
        Document::Many(faces) => FacesInput {
            faces,
            primary_index: None,
        },
        Document::One(face) => FacesInput {
            faces: vec![face],
            primary_index: None,
        },
    })
}
