//! Transpiler facade.
//!
//! Ties the parser, the renderer and the tracer together behind one call:
//! text in, class source out.

use parlance_debug::{TraceEvent, Tracer, TracerConfig};
use parlance_foundation::{Result, Stage};
use parlance_language::{ClassDecl, RenderConfig, render_with_config};
use parlance_parser::{ClassParser, LexiconTagger, Tagger};

/// Configuration for a [`Transpiler`].
#[derive(Clone, Debug, Default)]
pub struct TranspilerConfig {
    /// Tracer settings used for each call.
    pub trace: TracerConfig,
    /// Renderer settings.
    pub render: RenderConfig,
}

impl TranspilerConfig {
    /// Creates a default configuration: tracing off, four-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the tracer configuration.
    #[must_use]
    pub fn with_trace(mut self, trace: TracerConfig) -> Self {
        self.trace = trace;
        self
    }

    /// Builder method to set the renderer configuration.
    #[must_use]
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Builder method to trace every call to stderr.
    #[must_use]
    pub fn traced(mut self) -> Self {
        self.trace = self.trace.enabled().to_stderr();
        self
    }
}

/// Turns class paragraphs into class source code.
///
/// A `Transpiler` holds no per-call state and can be shared between
/// threads. Each call builds its own [`ClassDecl`] and, unless one is
/// passed in, its own [`Tracer`].
#[derive(Clone, Debug)]
pub struct Transpiler<T: Tagger = LexiconTagger> {
    parser: ClassParser<T>,
    config: TranspilerConfig,
}

impl Transpiler<LexiconTagger> {
    /// Creates a transpiler with the standard tagger and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TranspilerConfig::default())
    }

    /// Creates a transpiler with the standard tagger.
    #[must_use]
    pub fn with_config(config: TranspilerConfig) -> Self {
        Self::with_tagger(LexiconTagger::standard(), config)
    }
}

impl Default for Transpiler<LexiconTagger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tagger> Transpiler<T> {
    /// Creates a transpiler with a custom tagger.
    #[must_use]
    pub fn with_tagger(tagger: T, config: TranspilerConfig) -> Self {
        Self {
            parser: ClassParser::with_tagger(tagger),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TranspilerConfig {
        &self.config
    }

    /// Returns the underlying parser.
    #[must_use]
    pub fn parser(&self) -> &ClassParser<T> {
        &self.parser
    }

    /// Creates a fresh tracer from the configuration.
    #[must_use]
    pub fn tracer(&self) -> Tracer {
        Tracer::new(self.config.trace.clone())
    }

    /// Parses input text into a class description without rendering it.
    ///
    /// # Errors
    ///
    /// Returns the first parse error; see [`ClassParser::parse`].
    pub fn parse(&self, text: &str) -> Result<ClassDecl> {
        let mut tracer = self.tracer();
        tracer.start_run();
        self.parser.parse(text, &mut tracer)
    }

    /// Transpiles input text into class source code.
    ///
    /// # Errors
    ///
    /// Returns the first parse error. Rendering itself cannot fail.
    pub fn transpile(&self, text: &str) -> Result<String> {
        let mut tracer = self.tracer();
        self.transpile_with_tracer(text, &mut tracer)
    }

    /// Transpiles input text, recording events into the given tracer.
    ///
    /// Each call starts a new run in the tracer.
    ///
    /// # Errors
    ///
    /// Returns the first parse error.
    pub fn transpile_with_tracer(&self, text: &str, tracer: &mut Tracer) -> Result<String> {
        tracer.start_run();
        let class = self.parser.parse(text, tracer)?;
        Ok(self.generate(&class, tracer))
    }

    /// Renders a class description with the configured renderer.
    #[must_use]
    pub fn generate(&self, class: &ClassDecl, tracer: &mut Tracer) -> String {
        tracer.stage_start(Stage::Generation);
        let code = render_with_config(class, &self.config.render);
        tracer.record(TraceEvent::CodeGenerated {
            lines: code.lines().count(),
        });
        tracer.stage_end(Stage::Generation);
        code
    }
}

/// Transpiles input text with the default configuration.
///
/// # Errors
///
/// Returns the first parse error.
pub fn transpile(text: &str) -> Result<String> {
    Transpiler::new().transpile(text)
}
