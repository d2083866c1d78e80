//! The JAMS container as the converter sees it.
//!
//! An existing document is kept as raw JSON, so a load/save cycle writes
//! back every section, key order and number exactly as it was read. Only
//! the annotation the converter builds is typed.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const SECTIONS: &str = "sections";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Jams {
    document: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Jams {
    type Error = String;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        match document.get(SECTIONS) {
            None | Some(Value::Array(_)) => Ok(Self { document }),
            Some(other) => Err(format!("\"{}\" must be an array, found {}", SECTIONS, other)),
        }
    }
}

impl Serialize for Jams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl Jams {
    pub fn sections(&self) -> &[Value] {
        match self.document.get(SECTIONS) {
            Some(Value::Array(sections)) => sections.as_slice(),
            _ => &[],
        }
    }

    /// Whether any section's `annotation_metadata.annotator` is the string `annotator`.
    pub fn has_annotator(&self, annotator: &str) -> bool {
        self.sections().iter().any(|section| {
            section.pointer("/annotation_metadata/annotator").and_then(Value::as_str) == Some(annotator)
        })
    }

    /// Appends `annotation` after the existing sections, creating the array if needed.
    pub fn push_annotation(&mut self, annotation: &Annotation) -> serde_json::Result<()> {
        let section = serde_json::to_value(annotation)?;
        let sections = self.document
            .entry(SECTIONS)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(sections) = sections {
            sections.push(section);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub annotation_metadata: AnnotationMetadata,
    pub data: Vec<Datapoint>,
}

impl Annotation {
    /// An empty annotation attributed to `annotator`. No other metadata is filled in.
    pub fn new(annotator: impl Into<String>) -> Self {
        Self {
            annotation_metadata: AnnotationMetadata { annotator: annotator.into() },
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    pub annotator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datapoint {
    pub start: Measure,
    pub end: Measure,
    pub label: Label,
}

impl Datapoint {
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            start: Measure { value: start },
            end: Measure { value: end },
            label: Label { value: label.into(), context: String::new() },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub value: String,
    pub context: String,
}
