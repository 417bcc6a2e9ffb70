//! Rendering options and configuration.

/// Default maximum nesting depth accepted by the renderer.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for rendering documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum node nesting depth (None = unlimited)
    ///
    /// Parsed JSON is already limited to about 64 node levels by the JSON
    /// parser; this bound matters for trees built in code.
    pub max_depth: Option<usize>,

    /// Whether batch rendering uses parallel processing
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth.max(1));
        self
    }

    /// Disable the nesting depth check.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Disable parallel batch rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            parallel: true,
        }
    }
}
