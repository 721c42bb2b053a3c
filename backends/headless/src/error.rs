use thiserror::Error;

/// Errors raised while turning a view tree into a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The view tree nests deeper than the renderer allows, usually because
    /// a `body` returns a view containing itself.
    #[error("view tree exceeds the maximum depth of {depth}")]
    DepthExceeded {
        /// The configured limit.
        depth: usize,
    },
    /// The host was asked to draw into a viewport without area.
    #[error("viewport has no area")]
    EmptyViewport,
}
