//! Chains transforms into a single pass over the text

// this_file: crates/harf-core/src/pipeline.rs

use crate::{
    error::{HarfError, Result},
    traits::Transform,
};
use std::sync::Arc;

/// An ordered list of transforms applied one after another
///
/// ```
/// use std::sync::Arc;
/// use harf_core::{Pipeline, Transform};
///
/// struct Collapse;
///
/// impl Transform for Collapse {
///     fn name(&self) -> &'static str {
///         "collapse"
///     }
///
///     fn apply(&self, text: &str) -> String {
///         text.split_whitespace().collect::<Vec<_>>().join(" ")
///     }
/// }
///
/// let pipeline = Pipeline::builder().stage(Arc::new(Collapse)).build()?;
///
/// assert_eq!(pipeline.process("نص   عربي"), "نص عربي");
/// assert_eq!(pipeline.stage_names(), vec!["collapse"]);
/// # Ok::<(), harf_core::HarfError>(())
/// ```
pub struct Pipeline {
    stages: Vec<Arc<dyn Transform>>,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Send text through every stage in order
    pub fn process(&self, text: &str) -> String {
        let mut current = text.to_string();
        for stage in &self.stages {
            log::debug!("Executing stage: {}", stage.name());
            current = stage.apply(&current);
        }
        current
    }

    /// Names of the configured stages, in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Build pipelines stage by stage
#[derive(Default)]
pub struct PipelineBuilder {
    stages: Vec<Arc<dyn Transform>>,
}

impl PipelineBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the flow
    pub fn stage(mut self, stage: Arc<dyn Transform>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append several stages at once
    pub fn stages<I>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Transform>>,
    {
        self.stages.extend(stages);
        self
    }

    /// Create the pipeline, ready to run
    pub fn build(self) -> Result<Pipeline> {
        if self.stages.is_empty() {
            return Err(HarfError::Pipeline("No stages configured".into()));
        }
        Ok(Pipeline {
            stages: self.stages,
        })
    }
}
