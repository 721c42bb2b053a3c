//! The render tree produced by [`Renderer`](crate::Renderer).

use nami::Binding;
use rollkit_core::{Environment, gesture::GestureObserver};
use rollkit_layout::{Alignment, Angle, FrameLayout, Point, Rect, Shape, Size, ZStackLayout};

/// What a [`RenderNode`] draws or how it arranges its children.
#[derive(Debug)]
pub enum NodeKind {
    /// Draws nothing and takes no space.
    Empty,
    /// A line of text.
    Text(String),
    /// A platform switch. Its only child is the label.
    Switch {
        /// The state the switch showed when it was rendered.
        is_on: bool,
        /// The state the switch flips when tapped.
        toggle: Binding<bool>,
    },
    /// Children overlaid on each other.
    Stack(ZStackLayout),
    /// A single child sized and aligned by a frame.
    Frame(FrameLayout),
    /// Draws the child with an opacity.
    Opacity {
        /// The value the view asked for.
        target: f32,
        /// The value on screen, possibly mid-animation.
        presented: f32,
    },
    /// Rotates the child about its centre.
    Rotation {
        /// The angle the view asked for.
        target: Angle,
        /// The angle on screen, possibly mid-animation.
        presented: Angle,
    },
    /// Makes the whole child frame hit-testable.
    ContentShape(Shape),
    /// Runs a gesture handler when the child is tapped.
    Tap {
        /// The gesture and its action.
        observer: GestureObserver,
        /// The environment the handler runs in.
        env: Environment,
    },
}

/// One node of a rendered frame.
#[derive(Debug)]
pub struct RenderNode {
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<RenderNode>,
    pub(crate) frame: Rect,
}

impl RenderNode {
    pub(crate) const fn new(kind: NodeKind, children: Vec<Self>) -> Self {
        Self {
            kind,
            children,
            frame: Rect::from_size(Size::zero()),
        }
    }

    pub(crate) const fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub(crate) fn wrap(kind: NodeKind, child: Self) -> Self {
        Self::new(kind, vec![child])
    }

    /// What this node is.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's children, back to front.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Where the node was placed, in viewport coordinates.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// The text of a text node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Every node in the tree, this one included, that matches `predicate`,
    /// in depth-first order.
    pub fn find_all(&self, predicate: impl Fn(&Self) -> bool) -> Vec<&Self> {
        fn walk<'a>(
            node: &'a RenderNode,
            predicate: &dyn Fn(&RenderNode) -> bool,
            out: &mut Vec<&'a RenderNode>,
        ) {
            if predicate(node) {
                out.push(node);
            }
            for child in &node.children {
                walk(child, predicate, out);
            }
        }

        let mut found = Vec::new();
        walk(self, &predicate, &mut found);
        found
    }

    /// The first node matching `predicate`, depth first.
    pub fn find(&self, predicate: impl Fn(&Self) -> bool) -> Option<&Self> {
        fn walk<'a>(
            node: &'a RenderNode,
            predicate: &dyn Fn(&RenderNode) -> bool,
        ) -> Option<&'a RenderNode> {
            if predicate(node) {
                return Some(node);
            }
            node.children.iter().find_map(|child| walk(child, predicate))
        }

        walk(self, &predicate)
    }

    /// All text in the tree, in depth-first order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.find_all(|node| node.text().is_some())
            .into_iter()
            .filter_map(Self::text)
            .collect()
    }

    /// Frame of the first text node reading `text`.
    #[must_use]
    pub fn text_frame(&self, text: &str) -> Option<Rect> {
        self.find(|node| node.text() == Some(text)).map(Self::frame)
    }

    /// The presented opacity of the first text node reading `text`, combined
    /// with every opacity above it.
    #[must_use]
    pub fn opacity_of(&self, text: &str) -> Option<f32> {
        if self.text() == Some(text) {
            return Some(1.0);
        }
        let own = match self.kind {
            NodeKind::Opacity { presented, .. } => presented,
            _ => 1.0,
        };
        self.children
            .iter()
            .find_map(|child| child.opacity_of(text))
            .map(|inner| own * inner)
    }

    /// The presented angle of the outermost rotation.
    #[must_use]
    pub fn rotation(&self) -> Option<Angle> {
        self.find(|node| matches!(node.kind, NodeKind::Rotation { .. }))
            .and_then(|node| match node.kind {
                NodeKind::Rotation { presented, .. } => Some(presented),
                _ => None,
            })
    }

    /// The alignment of the outermost frame.
    #[must_use]
    pub fn frame_alignment(&self) -> Option<Alignment> {
        self.find(|node| matches!(node.kind, NodeKind::Frame(_)))
            .and_then(|node| match node.kind {
                NodeKind::Frame(layout) => Some(layout.alignment),
                _ => None,
            })
    }

    /// Moves this node and everything below it.
    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let origin = self.frame.origin();
        self.frame = self
            .frame
            .with_origin(Point::new(origin.x + dx, origin.y + dy));
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// `true` if anything visible in this subtree lies under `point`.
    pub(crate) fn draws_at(&self, point: Point) -> bool {
        match &self.kind {
            NodeKind::Opacity { presented, .. } if *presented <= 0.0 => false,
            NodeKind::Text(_) | NodeKind::Switch { .. } => self.frame.contains(point),
            NodeKind::ContentShape(Shape::Rectangle) => self.frame.contains(point),
            _ => self.children.iter().any(|child| child.draws_at(point)),
        }
    }
}
