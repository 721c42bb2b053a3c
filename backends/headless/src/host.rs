use std::time::Duration;

use rollkit_core::{
    Animation, Environment, View,
    animation::take_transaction,
    gesture::Gesture,
};
use rollkit_layout::{Angle, Point, Rect, Size};

use crate::{
    Renderer,
    animator::{Animator, Channel},
    error::RenderError,
    node::{NodeKind, RenderNode},
};

/// Drives a view through frames without a window.
///
/// Every frame rebuilds the view from its builder, so state read from
/// bindings is always fresh. Properties whose target changed since the last
/// frame animate when the change was made inside
/// [`with_animation`](rollkit_core::with_animation).
pub struct HeadlessHost<F> {
    build: F,
    size: Size,
    env: Environment,
    renderer: Renderer,
    animator: Animator,
    last: Option<RenderNode>,
}

impl<F> core::fmt::Debug for HeadlessHost<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("size", &self.size)
            .field("animator", &self.animator)
            .finish_non_exhaustive()
    }
}

impl<F> HeadlessHost<F> {
    /// Creates a host drawing into a viewport of `size`.
    pub fn new(size: Size, build: F) -> Self {
        Self {
            build,
            size,
            env: Environment::new(),
            renderer: Renderer::new(),
            animator: Animator::new(),
            last: None,
        }
    }

    /// The environment handed to the root view.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Replaces the renderer, for example to change its depth limit.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// The most recent frame.
    #[must_use]
    pub const fn last_frame(&self) -> Option<&RenderNode> {
        self.last.as_ref()
    }

    /// `true` once no property is animating.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.animator.is_settled()
    }

    /// Taps at `point` on the last frame. Returns `true` if a handler ran.
    ///
    /// The tap reaches the deepest tap target under the point: either a
    /// gesture whose subtree declares a content shape or draws something
    /// visible there, or an unstyled switch.
    pub fn tap(&mut self, point: Point) -> bool {
        let Some(root) = self.last.as_mut() else {
            return false;
        };
        let handled = hit(root, point);
        tracing::debug!(x = point.x, y = point.y, handled, "tap");
        handled
    }
}

impl<V, F> HeadlessHost<F>
where
    V: View,
    F: FnMut() -> V,
{
    /// Renders, lays out and animates one frame at time `now`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyViewport`] for a viewport without area and
    /// [`RenderError::DepthExceeded`] if the view nests too deeply.
    pub fn frame(&mut self, now: Duration) -> Result<&RenderNode, RenderError> {
        if self.size.is_empty() {
            return Err(RenderError::EmptyViewport);
        }
        let view = (self.build)();
        let mut root = self.renderer.render(&self.env, view)?;
        root.place(Rect::from_size(self.size));

        let transaction = take_transaction();
        let mut path = Vec::new();
        animate(&mut root, &mut path, &mut self.animator, transaction, now);
        self.animator.finish_frame();

        tracing::trace!(?now, settled = self.animator.is_settled(), "frame");
        Ok(self.last.insert(root))
    }
}

fn animate(
    node: &mut RenderNode,
    path: &mut Vec<usize>,
    animator: &mut Animator,
    transaction: Option<Animation>,
    now: Duration,
) {
    match &mut node.kind {
        NodeKind::Opacity { target, presented } => {
            *presented = animator.drive(path, Channel::Opacity, *target, transaction, now);
        }
        NodeKind::Rotation { target, presented } => {
            let degrees =
                animator.drive(path, Channel::Rotation, target.to_degrees(), transaction, now);
            *presented = Angle::degrees(degrees);
        }
        NodeKind::Frame(_) => {
            if let Some(child) = node.children.first_mut() {
                let placed = child.frame.origin();
                let x = animator.drive(path, Channel::OriginX, placed.x, transaction, now);
                let y = animator.drive(path, Channel::OriginY, placed.y, transaction, now);
                child.translate(x - placed.x, y - placed.y);
            }
        }
        _ => {}
    }

    for (index, child) in node.children.iter_mut().enumerate() {
        path.push(index);
        animate(child, path, animator, transaction, now);
        path.pop();
    }
}

fn hit(node: &mut RenderNode, point: Point) -> bool {
    if let NodeKind::Opacity { presented, .. } = node.kind
        && presented <= 0.0
    {
        return false;
    }

    for child in node.children.iter_mut().rev() {
        if hit(child, point) {
            return true;
        }
    }

    match &mut node.kind {
        NodeKind::Tap { observer, env } => {
            let covered = node.children.iter().any(|child| child.draws_at(point));
            let single = matches!(observer.gesture(), Gesture::Tap(tap) if tap.count == 1);
            if covered && single {
                observer.fire(env);
                return true;
            }
            false
        }
        NodeKind::Switch { toggle, .. } if node.frame.contains(point) => {
            toggle.set(!toggle.get());
            true
        }
        _ => false,
    }
}
