//! Rewrite pipeline for converting the Markdown dialect to HTML.
//!
//! The pipeline transforms a single buffer through a fixed series of stages:
//! 1. Headings (`# text`)
//! 2. Unordered lists (`- item`)
//! 3. Ordered lists (`* item`)
//! 4. Paragraphs (every remaining line, including HTML emitted above)
//! 5. Bold (`**text**`)
//! 6. Emphasis (`__text__`)
//! 7. Hash (`[[text]]` becomes the MD5 digest of `text`)
//! 8. Strip (`((text))` becomes `text` without any `c`/`C`)
//!
//! Every stage rewrites the whole buffer before the next one runs, so the
//! order is observable in the output. The inline-only mode runs stages 5-8.

mod rule;
pub mod stages;

pub use rule::{ReplaceFn, RewriteRule};
pub use stages::{md5_hex, strip_c};

/// A stage in the rewrite pipeline.
///
/// Stages are pure: they take the current buffer and return the rewritten
/// one. Unmatched text passes through unchanged, so a stage never fails.
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Rewrite every eligible occurrence in `buffer`.
    fn apply(&self, buffer: &str) -> String;
}

/// Which rule set a conversion runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// All eight stages, block-level first.
    #[default]
    Full,
    /// Bold, emphasis, hash and strip only.
    InlineOnly,
}

/// The ordered list of rewrite stages.
///
/// The default pipeline is the full eight-stage rule set:
/// heading → unordered_list → ordered_list → paragraph → bold → emphasis → hash → strip_c.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the full pipeline: block-level stages, then inline stages.
    pub fn full() -> Self {
        let mut pipeline = Self::new();
        pipeline
            .add_stage(stages::heading())
            .add_stage(stages::unordered_list())
            .add_stage(stages::ordered_list())
            .add_stage(stages::paragraph());
        pipeline.add_inline_stages();
        pipeline
    }

    /// Create a pipeline with only the inline stages.
    pub fn inline_only() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_inline_stages();
        pipeline
    }

    /// Create the pipeline for a conversion mode.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Full => Self::full(),
            Mode::InlineOnly => Self::inline_only(),
        }
    }

    fn add_inline_stages(&mut self) {
        self.add_stage(stages::bold())
            .add_stage(stages::emphasis())
            .add_stage(stages::hash())
            .add_stage(stages::strip());
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage once, in order, over the whole buffer.
    pub fn run(&self, input: &str) -> String {
        let mut buffer = input.to_string();
        for stage in &self.stages {
            let rewritten = stage.apply(&buffer);
            log::debug!(
                "stage '{}': {} -> {} bytes",
                stage.name(),
                buffer.len(),
                rewritten.len()
            );
            buffer = rewritten;
        }
        buffer
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::full()
    }
}

/// Convert a document with the full rule set.
pub fn markdown_to_html(markdown: &str) -> String {
    Pipeline::full().run(markdown)
}
