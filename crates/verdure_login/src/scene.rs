//! Scene composition
//!
//! Combines the static layout, the transition's derived visuals and the
//! keyboard offset into a flat, z-ordered list of positioned nodes. A
//! renderer draws the nodes in order; hit-testing walks them in reverse.

use crate::layout::{ScreenLayout, BUTTON_RADIUS, CLOSE_BUTTON_SIZE, FIELD_HEIGHT};
use crate::transition::DerivedVisuals;
use serde::Serialize;
use verdure_platform::{Rect, ScreenSize};

/// Nodes below this opacity are not interactive
const MIN_INTERACTIVE_OPACITY: f32 = 0.01;

/// Identifies an element of the login screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    Background,
    LoginButton,
    FacebookButton,
    FormContainer,
    FormCard,
    EmailField,
    PasswordField,
    SignInButton,
    CloseButton,
}

/// Text drawn inside a node
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: &'static str,
    pub color: &'static str,
    pub size: f32,
    /// Rotation of the label around its center in degrees
    pub rotation_deg: f32,
}

impl Label {
    fn new(text: &'static str, color: &'static str, size: f32) -> Self {
        Self {
            text,
            color,
            size,
            rotation_deg: 0.0,
        }
    }
}

/// A positioned element ready to draw
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: NodeId,
    /// Final on-screen rectangle (all offsets applied)
    pub rect: Rect,
    /// Vertical offset applied to the resting rectangle
    pub translate_y: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Fill color as `#rrggbb`, or an image asset name for the background
    pub fill: &'static str,
    pub corner_radius: f32,
    pub label: Option<Label>,
}

impl SceneNode {
    fn new(id: NodeId, rest: Rect, translate_y: f32, z_index: i32, fill: &'static str) -> Self {
        Self {
            id,
            rect: rest.offset_y(translate_y),
            translate_y,
            opacity: 1.0,
            z_index,
            fill,
            corner_radius: 0.0,
            label: None,
        }
    }

    fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    fn label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Whether the node can receive touches
    pub fn is_interactive(&self) -> bool {
        self.opacity >= MIN_INTERACTIVE_OPACITY
    }
}

/// One composed frame of the login screen
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub size: ScreenSize,
    pub keyboard_offset: f32,
    pub visuals: DerivedVisuals,
    /// Nodes in paint order (ascending z-index)
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    /// Compose a frame from layout, transition visuals and keyboard offset
    pub fn compose(layout: &ScreenLayout, visuals: DerivedVisuals, keyboard_offset: f32) -> Self {
        let k = keyboard_offset;
        let form_dy = visuals.form_offset + k;

        let mut background = layout.background;
        background.height = (background.height - visuals.image_bottom_margin).max(0.0);

        let mut close_label = Label::new("X", "#424242", 30.0);
        close_label.rotation_deg = visuals.close_rotation_deg;

        let mut nodes = vec![
            SceneNode::new(NodeId::Background, background, k, 1, "leaf-background.jpg"),
            SceneNode::new(
                NodeId::LoginButton,
                layout.login_button,
                visuals.first_button_offset + k,
                2,
                "#ffffff",
            )
            .opacity(visuals.button_opacity)
            .rounded(BUTTON_RADIUS)
            .label(Label::new("LOGIN", "#000000", 20.0)),
            SceneNode::new(
                NodeId::FacebookButton,
                layout.facebook_button,
                visuals.second_button_offset + k,
                2,
                "#3b5998",
            )
            .opacity(visuals.button_opacity)
            .rounded(BUTTON_RADIUS)
            .label(Label::new("LOGIN WITH FACEBOOK", "#ffffff", 20.0)),
            SceneNode::new(
                NodeId::FormContainer,
                layout.form_container,
                form_dy,
                100,
                "#ffffff",
            ),
            SceneNode::new(NodeId::FormCard, layout.form_card, form_dy, 101, "#ffffff")
                .rounded(10.0),
            SceneNode::new(NodeId::EmailField, layout.email_field, form_dy, 102, "#ffffff")
                .rounded(FIELD_HEIGHT / 2.0)
                .label(Label::new("EMAIL", "#9e9e9e", 16.0)),
            SceneNode::new(
                NodeId::PasswordField,
                layout.password_field,
                form_dy,
                102,
                "#ffffff",
            )
            .rounded(FIELD_HEIGHT / 2.0)
            .label(Label::new("PASSWORD", "#9e9e9e", 16.0)),
            SceneNode::new(
                NodeId::SignInButton,
                layout.sign_in_button,
                form_dy,
                102,
                "#ffffff",
            )
            .rounded(BUTTON_RADIUS)
            .label(Label::new("SIGN IN", "#000000", 20.0)),
            SceneNode::new(
                NodeId::CloseButton,
                layout.close_button,
                form_dy,
                1000,
                "#f7f7f7",
            )
            .rounded(CLOSE_BUTTON_SIZE / 2.0)
            .label(close_label),
        ];

        // Stable: equal z-indices keep declaration order
        nodes.sort_by_key(|node| node.z_index);

        Self {
            size: layout.size,
            keyboard_offset,
            visuals,
            nodes,
        }
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Topmost interactive node under a point
    pub fn hit_test(&self, x: f32, y: f32) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.is_interactive() && node.rect.contains(x, y))
            .map(|node| node.id)
    }
}
