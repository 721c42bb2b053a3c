use rollkit_controls::ToggleConfig;
use rollkit_core::{
    AnyView, Environment, Metadata, Native, View, gesture::GestureObserver, views::Group,
};
use rollkit_layout::{ContentShape, Frame, Opacity, Rotation, ZStack, ZStackLayout};

use crate::{
    error::RenderError,
    node::{NodeKind, RenderNode},
};

const DEFAULT_MAX_DEPTH: usize = 256;

/// Walks view trees and produces [`RenderNode`] trees.
///
/// Views the renderer knows are turned into nodes directly. Everything else
/// is asked for its `body`, which is walked in turn.
#[derive(Debug)]
pub struct Renderer {
    max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with the default depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how deeply views may nest, counting every evaluated `body`.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Renders a view into an unplaced [`RenderNode`] tree.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DepthExceeded`] if the tree nests too deeply.
    pub fn render<V: View>(&self, env: &Environment, view: V) -> Result<RenderNode, RenderError> {
        self.render_any(env, 0, AnyView::new(view))
    }

    #[allow(clippy::too_many_lines)]
    fn render_any(
        &self,
        env: &Environment,
        depth: usize,
        view: AnyView,
    ) -> Result<RenderNode, RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::DepthExceeded {
                depth: self.max_depth,
            });
        }
        tracing::trace!(depth, view = view.type_name(), "render node");

        let view = match view.downcast::<()>() {
            Ok(_) => return Ok(RenderNode::leaf(NodeKind::Empty)),
            Err(view) => view,
        };

        let view = match view.downcast::<&'static str>() {
            Ok(text) => return Ok(RenderNode::leaf(NodeKind::Text((*text).to_owned()))),
            Err(view) => view,
        };

        let view = match view.downcast::<String>() {
            Ok(text) => return Ok(RenderNode::leaf(NodeKind::Text(*text))),
            Err(view) => view,
        };

        let view = match view.downcast::<Native<ToggleConfig>>() {
            Ok(native) => return self.render_switch(env, depth, native.0),
            Err(view) => view,
        };

        let view = match view.downcast::<Frame>() {
            Ok(frame) => {
                let (layout, content) = frame.into_inner();
                let child = self.render_any(env, depth + 1, content)?;
                return Ok(RenderNode::wrap(NodeKind::Frame(layout), child));
            }
            Err(view) => view,
        };

        let view = match view.downcast::<ZStack>() {
            Ok(stack) => {
                let (layout, contents) = stack.into_inner();
                return self.render_stack(env, depth, layout, contents);
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Group>() {
            Ok(group) => {
                return self.render_stack(env, depth, ZStackLayout::default(), group.into_inner());
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Metadata<Environment>>() {
            Ok(metadata) => {
                let Metadata { content, value } = *metadata;
                return self.render_any(&value, depth + 1, content);
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Metadata<Opacity>>() {
            Ok(metadata) => {
                let Metadata { content, value } = *metadata;
                let child = self.render_any(env, depth + 1, content)?;
                let kind = NodeKind::Opacity {
                    target: value.0,
                    presented: value.0,
                };
                return Ok(RenderNode::wrap(kind, child));
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Metadata<Rotation>>() {
            Ok(metadata) => {
                let Metadata { content, value } = *metadata;
                let child = self.render_any(env, depth + 1, content)?;
                let kind = NodeKind::Rotation {
                    target: value.0,
                    presented: value.0,
                };
                return Ok(RenderNode::wrap(kind, child));
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Metadata<ContentShape>>() {
            Ok(metadata) => {
                let Metadata { content, value } = *metadata;
                let child = self.render_any(env, depth + 1, content)?;
                return Ok(RenderNode::wrap(NodeKind::ContentShape(value.0), child));
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Metadata<GestureObserver>>() {
            Ok(metadata) => {
                let Metadata { content, value } = *metadata;
                let child = self.render_any(env, depth + 1, content)?;
                let kind = NodeKind::Tap {
                    observer: value,
                    env: env.clone(),
                };
                return Ok(RenderNode::wrap(kind, child));
            }
            Err(view) => view,
        };

        // Fallback: evaluate the view body and continue walking.
        let next = view.body(env);
        self.render_any(env, depth + 1, AnyView::new(next))
    }

    fn render_stack(
        &self,
        env: &Environment,
        depth: usize,
        layout: ZStackLayout,
        contents: Vec<AnyView>,
    ) -> Result<RenderNode, RenderError> {
        let children = contents
            .into_iter()
            .map(|child| self.render_any(env, depth + 1, child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RenderNode::new(NodeKind::Stack(layout), children))
    }

    fn render_switch(
        &self,
        env: &Environment,
        depth: usize,
        config: ToggleConfig,
    ) -> Result<RenderNode, RenderError> {
        let ToggleConfig { label, toggle, .. } = config;
        let label = self.render_any(env, depth + 1, label)?;
        let kind = NodeKind::Switch {
            is_on: toggle.get(),
            toggle,
        };
        Ok(RenderNode::wrap(kind, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nami::binding;
    use rollkit_controls::{Toggle, toggle};
    use rollkit_core::{Hook, env::With};
    use rollkit_layout::{Alignment, Angle, zstack};

    fn render(view: impl View) -> RenderNode {
        Renderer::new().render(&Environment::new(), view).unwrap()
    }

    #[derive(Debug)]
    struct Greeting;

    impl View for Greeting {
        fn body(self, _env: &Environment) -> impl View {
            ("hello", String::from("world"))
        }
    }

    #[derive(Debug)]
    struct Forever;

    impl View for Forever {
        fn body(self, _env: &Environment) -> impl View {
            Self
        }
    }

    #[test]
    fn custom_views_render_through_their_body() {
        let node = render(Greeting);
        assert_eq!(node.texts(), ["hello", "world"]);
        assert!(matches!(node.kind(), NodeKind::Stack(_)));
    }

    #[test]
    fn unit_renders_empty() {
        assert!(matches!(render(()).kind(), NodeKind::Empty));
    }

    #[test]
    fn self_recursive_body_hits_the_depth_limit() {
        let err = Renderer::new()
            .max_depth(16)
            .render(&Environment::new(), Forever)
            .unwrap_err();
        assert_eq!(err, RenderError::DepthExceeded { depth: 16 });
    }

    #[test]
    fn transforms_become_nodes() {
        let view = Metadata::new(
            Metadata::new(zstack(("a", "b")), Opacity(0.5)),
            Rotation(Angle::degrees(90.0)),
        );
        let node = render(view);
        assert_eq!(node.rotation(), Some(Angle::degrees(90.0)));
        assert_eq!(node.opacity_of("a"), Some(0.5));
        assert_eq!(node.opacity_of("missing"), None);
    }

    #[test]
    fn frames_keep_their_layout() {
        let node = render(Frame::new("x").alignment(Alignment::Bottom));
        assert_eq!(node.frame_alignment(), Some(Alignment::Bottom));
    }

    #[test]
    fn unstyled_toggle_renders_a_switch() {
        let is_on = binding(true);
        let node = render(toggle("Wi-Fi", &is_on));
        match node.kind() {
            NodeKind::Switch { is_on, .. } => assert!(*is_on),
            other => panic!("expected a switch, got {other:?}"),
        }
        assert_eq!(node.texts(), ["Wi-Fi"]);
    }

    #[test]
    fn hooks_replace_the_switch() {
        let is_on = binding(false);
        let hook = Hook::new(|_env: &Environment, config: rollkit_controls::ToggleConfig| {
            if config.toggle.get() { "on" } else { "off" }
        });
        let node = render(With::new(Toggle::new(&is_on), hook));
        assert_eq!(node.texts(), ["off"]);
        assert!(node.find(|node| matches!(node.kind(), NodeKind::Switch { .. })).is_none());
    }
}
