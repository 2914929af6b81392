use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::animation::value::parse_percentage;
use crate::animation::{
    Curve, Direction, FillMode, Keyframe, NumberOrPercentage, Origin, Percentage, Rounding,
    Transform,
};
use crate::foundation::core::{Rgba8, parse_color};
use crate::foundation::error::{PixmotionError, PixmotionResult};
use crate::render::pipeline::{DEFAULT_DELAY_MS, Root};
use crate::scene::model::{
    BounceDef, BoxDef, KeyframeDef, MarqueeDef, OriginDef, PadDef, PaddingDef, PercentDef,
    PositionedDef, RootDef, TransformDef, TransformationDef, WidgetDef,
};
use crate::widgets::{
    Align, AnimatedPositioned, Animation, Axis, Block, Bounce, Column, Image, Insets, Marquee,
    Padding, Row, Sequence, Stack, Transformation, WidgetRef,
};

const KEYFRAME_NAMES: &[(&str, f64)] = &[("from", 0.0), ("to", 1.0)];

/// Parse a JSON document and build its widget tree.
///
/// Relative image paths resolve against `base_dir`.
pub fn root_from_json(json: &str, base_dir: &Path) -> PixmotionResult<Root> {
    let def: RootDef = serde_json::from_str(json)?;
    build_root(&def, base_dir)
}

/// Read, parse and build the document at `path`.
pub fn root_from_path(path: &Path) -> PixmotionResult<Root> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read widget tree '{}'", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    root_from_json(&json, base_dir)
}

pub fn build_root(def: &RootDef, base_dir: &Path) -> PixmotionResult<Root> {
    let child = build_widget(&def.child, base_dir)?;
    let root = Root {
        child,
        delay_ms: def.delay.unwrap_or(DEFAULT_DELAY_MS),
        max_age: def.max_age.unwrap_or(0),
        show_full_animation: def.show_full_animation,
    };
    tracing::debug!(
        kind = def.child.kind(),
        frames = root.child.frame_count(),
        "built widget tree"
    );
    Ok(root)
}

pub fn build_widget(def: &WidgetDef, base_dir: &Path) -> PixmotionResult<WidgetRef> {
    let children = |defs: &[WidgetDef]| -> PixmotionResult<Vec<WidgetRef>> {
        defs.iter().map(|d| build_widget(d, base_dir)).collect()
    };

    let widget: WidgetRef = match def {
        WidgetDef::Box(b) => Arc::new(build_box(b, base_dir)?),
        WidgetDef::Row(v) => Arc::new(Row {
            children: children(&v.children)?,
            expanded: v.expanded,
        }),
        WidgetDef::Column(v) => Arc::new(Column {
            children: children(&v.children)?,
            expanded: v.expanded,
        }),
        WidgetDef::Stack(c) => Arc::new(Stack::new(children(&c.children)?)),
        WidgetDef::Padding(p) => Arc::new(build_padding(p, base_dir)?),
        WidgetDef::Image(i) => {
            let path = base_dir.join(&i.path);
            let bytes = std::fs::read(&path)
                .with_context(|| format!("read image '{}'", path.display()))?;
            let image = Image::new(bytes).size(i.width, i.height);
            image.prepare()?;
            Arc::new(image)
        }
        WidgetDef::Animation(c) => Arc::new(Animation::new(children(&c.children)?)),
        WidgetDef::Sequence(c) => Arc::new(Sequence::new(children(&c.children)?)),
        WidgetDef::Transformation(t) => Arc::new(build_transformation(t, base_dir)?),
        WidgetDef::Bounce(b) => Arc::new(build_bounce(b, base_dir)?),
        WidgetDef::Marquee(m) => Arc::new(build_marquee(m, base_dir)?),
        WidgetDef::AnimatedPositioned(p) => Arc::new(build_positioned(p, base_dir)?),
    };
    Ok(widget)
}

fn non_negative(kind: &str, field: &str, v: i32) -> PixmotionResult<i32> {
    if v < 0 {
        return Err(PixmotionError::validation(format!(
            "{kind}.{field} must be >= 0, got {v}"
        )));
    }
    Ok(v)
}

fn color(s: Option<&str>) -> PixmotionResult<Rgba8> {
    s.map_or(Ok(Rgba8::TRANSPARENT), parse_color)
}

/// Parse an optional configuration string, falling back to the type's default.
fn option<T>(s: Option<&str>) -> PixmotionResult<T>
where
    T: std::str::FromStr<Err = PixmotionError> + Default,
{
    s.map_or_else(|| Ok(T::default()), str::parse)
}

fn build_box(def: &BoxDef, base_dir: &Path) -> PixmotionResult<Block> {
    let mut block = Block::new()
        .size(
            non_negative("Box", "width", def.width)?,
            non_negative("Box", "height", def.height)?,
        )
        .padding(non_negative("Box", "padding", def.padding)?)
        .color(color(def.color.as_deref())?);
    if let Some(child) = &def.child {
        block = block.child(build_widget(child, base_dir)?);
    }
    Ok(block)
}

fn build_padding(def: &PaddingDef, base_dir: &Path) -> PixmotionResult<Padding> {
    let pad = match def.pad {
        PadDef::Uniform(v) => Insets::uniform(v),
        PadDef::Edges(insets) => insets,
    };
    let mut padding = Padding::new(build_widget(&def.child, base_dir)?, pad);
    padding.expanded = def.expanded;
    padding.color = color(def.color.as_deref())?;
    Ok(padding)
}

fn keyframe_percentage(def: &PercentDef) -> PixmotionResult<Percentage> {
    match def {
        PercentDef::Number(v) => Percentage::from_fraction(*v),
        PercentDef::Text(s) => parse_percentage(s, KEYFRAME_NAMES),
    }
}

fn origin_component(def: &PercentDef) -> PixmotionResult<NumberOrPercentage> {
    let p = match def {
        PercentDef::Number(v) => Percentage::from_fraction(*v)?,
        PercentDef::Text(s) => parse_percentage(s, &[])?,
    };
    Ok(p.into())
}

fn build_origin(def: Option<&OriginDef>) -> PixmotionResult<Origin> {
    match def {
        None => Ok(Origin::default()),
        Some(o) => Ok(Origin::new(origin_component(&o.x)?, origin_component(&o.y)?)),
    }
}

fn build_transform(def: &TransformDef) -> Transform {
    match *def {
        TransformDef::Translate { x, y } => Transform::translate(x, y),
        TransformDef::Scale { x, y } => Transform::scale(x, y),
        TransformDef::Rotate { angle } => Transform::rotate(angle),
    }
}

fn build_keyframe(def: &KeyframeDef) -> PixmotionResult<Keyframe> {
    Ok(Keyframe::new(
        keyframe_percentage(&def.percentage)?,
        def.transforms.iter().map(build_transform).collect(),
        option::<Curve>(def.curve.as_deref())?,
    ))
}

fn build_transformation(
    def: &TransformationDef,
    base_dir: &Path,
) -> PixmotionResult<Transformation> {
    let keyframes = def
        .keyframes
        .iter()
        .map(build_keyframe)
        .collect::<PixmotionResult<Vec<_>>>()?;

    Ok(Transformation::new(build_widget(&def.child, base_dir)?, keyframes, def.duration)
        .delay(def.delay)
        .size(
            non_negative("Transformation", "width", def.width)?,
            non_negative("Transformation", "height", def.height)?,
        )
        .origin(build_origin(def.origin.as_ref())?)
        .direction(option::<Direction>(def.direction.as_deref())?)
        .fill_mode(option::<FillMode>(def.fill_mode.as_deref())?)
        .rounding(option::<Rounding>(def.rounding.as_deref())?)
        .wait_for_child(def.wait_for_child))
}

/// Axis length a bounce or marquee needs, validated to be positive.
fn axis_length(kind: &str, axis: Axis, width: i32, height: i32) -> PixmotionResult<i32> {
    let (field, v) = match axis {
        Axis::Horizontal => ("width", width),
        Axis::Vertical => ("height", height),
    };
    if v <= 0 {
        return Err(PixmotionError::validation(format!(
            "{kind}.{field} must be > 0, got {v}"
        )));
    }
    Ok(v)
}

fn build_bounce(def: &BounceDef, base_dir: &Path) -> PixmotionResult<Bounce> {
    let axis = option::<Axis>(def.bounce_direction.as_deref())?;
    let length = axis_length("Bounce", axis, def.width, def.height)?;
    Ok(Bounce::new(build_widget(&def.child, base_dir)?, axis, length)
        .always(def.bounce_always)
        .pause(def.pause)
        .curve(option::<Curve>(def.curve.as_deref())?))
}

fn build_marquee(def: &MarqueeDef, base_dir: &Path) -> PixmotionResult<Marquee> {
    let axis = option::<Axis>(def.scroll_direction.as_deref())?;
    let length = axis_length("Marquee", axis, def.width, def.height)?;
    Ok(Marquee::new(build_widget(&def.child, base_dir)?, axis, length)
        .offsets(def.offset_start, def.offset_end)
        .align(option::<Align>(def.align.as_deref())?)
        .scroll_always(def.scroll_always))
}

fn build_positioned(def: &PositionedDef, base_dir: &Path) -> PixmotionResult<AnimatedPositioned> {
    Ok(AnimatedPositioned::new(build_widget(&def.child, base_dir)?, def.duration)
        .x(def.x_start, def.x_end)
        .y(def.y_start, def.y_end)
        .curve(option::<Curve>(def.curve.as_deref())?)
        .delay(def.delay)
        .hold(def.hold))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
