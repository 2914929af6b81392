//! JSON shape of widget tree documents.
//!
//! Definitions stay close to the wire format: enum-like options are kept as strings and
//! parsed by [`crate::scene::build`], so every mistake surfaces as a `PixmotionError` with
//! the offending value instead of a generic serde message.

use crate::widgets::Insets;

/// A whole document: playback metadata plus the widget tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RootDef {
    /// Milliseconds between frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(default)]
    pub show_full_animation: bool,
    pub child: WidgetDef,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum WidgetDef {
    Box(BoxDef),
    Row(VectorDef),
    Column(VectorDef),
    Stack(ChildrenDef),
    Padding(PaddingDef),
    Image(ImageDef),
    Animation(ChildrenDef),
    Sequence(ChildrenDef),
    Transformation(TransformationDef),
    Bounce(BounceDef),
    Marquee(MarqueeDef),
    AnimatedPositioned(PositionedDef),
}

impl WidgetDef {
    /// Type tag as written in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box(_) => "Box",
            Self::Row(_) => "Row",
            Self::Column(_) => "Column",
            Self::Stack(_) => "Stack",
            Self::Padding(_) => "Padding",
            Self::Image(_) => "Image",
            Self::Animation(_) => "Animation",
            Self::Sequence(_) => "Sequence",
            Self::Transformation(_) => "Transformation",
            Self::Bounce(_) => "Bounce",
            Self::Marquee(_) => "Marquee",
            Self::AnimatedPositioned(_) => "AnimatedPositioned",
        }
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct BoxDef {
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub padding: i32,
    /// Hex color, `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<WidgetDef>>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct VectorDef {
    #[serde(default)]
    pub children: Vec<WidgetDef>,
    #[serde(default)]
    pub expanded: bool,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ChildrenDef {
    #[serde(default)]
    pub children: Vec<WidgetDef>,
}

/// Uniform padding or per-edge insets.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PadDef {
    Uniform(i32),
    Edges(Insets),
}

impl Default for PadDef {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PaddingDef {
    pub child: Box<WidgetDef>,
    #[serde(default)]
    pub pad: PadDef,
    #[serde(default)]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImageDef {
    /// File path, relative to the document's directory.
    pub path: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// A number, or a string parsed as a percentage (`"50%"`, `"from"`, ...).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PercentDef {
    Number(f64),
    Text(String),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum TransformDef {
    Translate {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Scale {
        #[serde(default = "one")]
        x: f64,
        #[serde(default = "one")]
        y: f64,
    },
    Rotate {
        #[serde(default)]
        angle: f64,
    },
}

fn one() -> f64 {
    1.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct KeyframeDef {
    pub percentage: PercentDef,
    #[serde(default)]
    pub transforms: Vec<TransformDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OriginDef {
    pub x: PercentDef,
    pub y: PercentDef,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TransformationDef {
    pub child: Box<WidgetDef>,
    pub keyframes: Vec<KeyframeDef>,
    pub duration: usize,
    #[serde(default)]
    pub delay: usize,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<String>,
    #[serde(default)]
    pub wait_for_child: bool,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BounceDef {
    pub child: Box<WidgetDef>,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_direction: Option<String>,
    #[serde(default)]
    pub bounce_always: bool,
    #[serde(default)]
    pub pause: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MarqueeDef {
    pub child: Box<WidgetDef>,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub offset_start: i32,
    #[serde(default)]
    pub offset_end: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default)]
    pub scroll_always: bool,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PositionedDef {
    pub child: Box<WidgetDef>,
    #[serde(default)]
    pub x_start: i32,
    #[serde(default)]
    pub x_end: i32,
    #[serde(default)]
    pub y_start: i32,
    #[serde(default)]
    pub y_end: i32,
    #[serde(default)]
    pub duration: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    #[serde(default)]
    pub delay: usize,
    #[serde(default)]
    pub hold: usize,
}
