use std::path::{Path, PathBuf};
use crate::converter::intervals::build_intervals;
use crate::jams::container::Annotation;
use crate::jams::store::{ContainerStore, JamsFile};
use crate::svl::document::SvlDocument;
use crate::{ConvertError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The container already had a section by this annotator; nothing was written.
    Skipped,
    Appended { datapoints: usize },
}

pub struct Converter<S> {
    store: S,
}

impl<S: ContainerStore> Converter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds the points of the SVL file at `input` to the container as a new
    /// section by `annotator`.
    pub fn convert(&self, input: impl AsRef<Path>, annotator: &str) -> Result<ConvertOutcome> {
        if !self.store.exists() {
            return Err(ConvertError::Precondition(format!(
                "{} does not exist; the JAMS file must be created before converting",
                self.store.describe()
            )));
        }

        let document = SvlDocument::from_path(input)?;
        self.apply(&document, annotator)
    }

    pub fn apply(&self, document: &SvlDocument, annotator: &str) -> Result<ConvertOutcome> {
        let mut jams = self.store.load()?;

        if jams.has_annotator(annotator) {
            log::info!("{} already has an annotation by '{}', skipping", self.store.describe(), annotator);
            return Ok(ConvertOutcome::Skipped);
        }

        let mut annotation = Annotation::new(annotator);
        let sample_rate = document.sample_rate()?;
        let points = document.points()?;
        annotation.data = build_intervals(&points, sample_rate)?;

        let datapoints = annotation.data.len();
        jams.push_annotation(&annotation)
            .map_err(|e| ConvertError::Save(format!("{}: {}", self.store.describe(), e)))?;
        self.store.save(&jams)?;

        log::info!(
            "Added {} datapoint(s) from {} point(s) at {} Hz for '{}'",
            datapoints, points.len(), sample_rate, annotator
        );
        Ok(ConvertOutcome::Appended { datapoints })
    }
}

/// Converts the SVL file at `input` into a new section of the existing JAMS
/// file at `output`, unless `annotator` already has one there.
pub fn convert(
    input: impl AsRef<Path>,
    annotator: &str,
    output: impl Into<PathBuf>,
) -> Result<ConvertOutcome> {
    Converter::new(JamsFile::new(output)).convert(input, annotator)
}
