use std::path::Path;
use crate::utils::file_ops::FileManager;
use crate::{ConvertError, DataError, Result};

/// One instantaneous labeled event from the `<dataset>` of an SVL file.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub frame: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RawPoint {
    frame: Option<String>,
    label: Option<String>,
}

/// A parsed Sonic Visualiser document.
///
/// Only well-formedness is checked at parse time. The sample rate and the
/// points are validated when they are asked for, so a caller can decide it
/// has nothing to do before touching them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvlDocument {
    // `Some(None)` is a model without a sampleRate attribute
    model: Option<Option<String>>,
    points: Vec<RawPoint>,
}

impl SvlDocument {
    pub fn parse(text: &str) -> Result<Self> {
        // SVL files start with <!DOCTYPE sonic-visualiser>
        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = true;
        let tree = roxmltree::Document::parse_with_options(text, options)
            .map_err(|e| ConvertError::Parse(e.to_string()))?;
        let mut document = SvlDocument::default();

        for node in tree.descendants().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                "model" if document.model.is_none() => {
                    document.model = Some(node.attribute("sampleRate").map(str::to_string));
                }
                "point" => document.points.push(RawPoint {
                    frame: node.attribute("frame").map(str::to_string),
                    label: node.attribute("label").map(str::to_string),
                }),
                _ => {}
            }
        }

        Ok(document)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Only UTF-8 input is supported, whatever the XML declaration says
        let text = String::from_utf8(FileManager::read_bytes(path)?)
            .map_err(|e| ConvertError::Parse(format!("{} is not valid UTF-8: {}", path.display(), e)))?;
        let document = Self::parse(&text)?;
        log::debug!("Parsed {}: {} point(s)", path.display(), document.point_count());
        Ok(document)
    }

    /// Sample rate of the first `<model>` in document order, in frames per second.
    pub fn sample_rate(&self) -> std::result::Result<f64, DataError> {
        let raw = self.model.as_ref()
            .ok_or(DataError::MissingModel)?
            .as_deref()
            .ok_or(DataError::MissingSampleRate)?;

        match raw.trim().parse::<f64>() {
            Ok(sr) if sr.is_finite() && sr > 0.0 => Ok(sr),
            _ => Err(DataError::InvalidSampleRate(raw.to_string())),
        }
    }

    /// All points in document order.
    pub fn points(&self) -> std::result::Result<Vec<Point>, DataError> {
        if self.points.is_empty() {
            return Err(DataError::EmptyPoints);
        }

        self.points.iter()
            .enumerate()
            .map(|(index, raw)| {
                let frame = raw.frame.as_deref()
                    .ok_or(DataError::MissingAttribute { index, attribute: "frame" })?;
                let label = raw.label.clone()
                    .ok_or(DataError::MissingAttribute { index, attribute: "label" })?;
                let frame = match frame.trim().parse::<f64>() {
                    Ok(f) if f.is_finite() => f,
                    _ => return Err(DataError::InvalidFrame { index, value: frame.to_string() }),
                };
                Ok(Point { frame, label })
            })
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
