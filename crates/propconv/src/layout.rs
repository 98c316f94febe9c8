//! Reference property targets: a flexbox node style, a drawing layer, and a
//! view that owns both.
//!
//! Property names are the camelCase keys used on the wire, so
//! `set_property(&mut view, "style.flexDirection", &json!("row"))` works as
//! written.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{
        Align, Direction, FlexDirection, FlexWrap, Justify, Overflow, PointerEvents, PositionType,
    },
    color::Color,
    geometry::{EdgeInsets, Rect, Size, Transform3D},
    property::{Properties, copy_property, properties},
};

/// Value of a dimension that has not been set; layout treats it as `auto`.
pub const UNDEFINED: f32 = f32::NAN;

/// Style of one flexbox layout node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutStyle {
    /// Layout direction.
    pub direction: Direction,
    /// Main axis.
    pub flex_direction: FlexDirection,
    /// Main-axis distribution of children.
    pub justify_content: Justify,
    /// Cross-axis alignment of children.
    pub align_items: Align,
    /// Cross-axis alignment of this node, overriding the parent's `align_items`.
    pub align_self: Align,
    /// Cross-axis distribution of wrapped lines.
    pub align_content: Align,
    /// Relative or absolute positioning.
    pub position_type: PositionType,
    /// Line wrapping.
    pub flex_wrap: FlexWrap,
    /// Overflow.
    pub overflow: Overflow,
    /// Shorthand; positive values set `flexGrow` during layout.
    pub flex: f32,
    /// Flex grow.
    pub flex_grow: f32,
    /// Flex shrink.
    pub flex_shrink: f32,
    /// Initial main size before growing or shrinking.
    pub flex_basis: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
    /// Min width.
    pub min_width: f32,
    /// Min height.
    pub min_height: f32,
    /// Max width.
    pub max_width: f32,
    /// Max height.
    pub max_height: f32,
    /// Width divided by height.
    pub aspect_ratio: f32,
    /// Margin.
    pub margin: EdgeInsets,
    /// Padding.
    pub padding: EdgeInsets,
    /// Border widths.
    pub border: EdgeInsets,
    /// Offsets from the containing block's edges.
    pub position: EdgeInsets,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: Justify::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            align_content: Align::FlexStart,
            position_type: PositionType::Relative,
            flex_wrap: FlexWrap::NoWrap,
            overflow: Overflow::Visible,
            flex: 0.0,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_basis: UNDEFINED,
            width: UNDEFINED,
            height: UNDEFINED,
            min_width: UNDEFINED,
            min_height: UNDEFINED,
            max_width: UNDEFINED,
            max_height: UNDEFINED,
            aspect_ratio: UNDEFINED,
            margin: EdgeInsets::default(),
            padding: EdgeInsets::default(),
            border: EdgeInsets::default(),
            position: EdgeInsets::default(),
        }
    }
}

properties! {
    LayoutStyle {
        "direction" => direction: scalar Direction,
        "flexDirection" => flex_direction: scalar FlexDirection,
        "justifyContent" => justify_content: scalar Justify,
        "alignItems" => align_items: scalar Align,
        "alignSelf" => align_self: scalar Align,
        "alignContent" => align_content: scalar Align,
        "position" => position_type: scalar PositionType,
        "flexWrap" => flex_wrap: scalar FlexWrap,
        "overflow" => overflow: scalar Overflow,
        "flex" => flex: scalar f32,
        "flexGrow" => flex_grow: scalar f32,
        "flexShrink" => flex_shrink: scalar f32,
        "flexBasis" => flex_basis: scalar f32,
        "width" => width: scalar f32,
        "height" => height: scalar f32,
        "minWidth" => min_width: scalar f32,
        "minHeight" => min_height: scalar f32,
        "maxWidth" => max_width: scalar f32,
        "maxHeight" => max_height: scalar f32,
        "aspectRatio" => aspect_ratio: scalar f32,
        "margin" => margin: scalar EdgeInsets,
        "padding" => padding: scalar EdgeInsets,
        "borderWidth" => border: scalar EdgeInsets,
        "inset" => position: scalar EdgeInsets,
    }
}

impl LayoutStyle {
    /// Copy every style property from `source`.
    ///
    /// Returns the number of properties copied; every property of a
    /// `LayoutStyle` is writable, so this is all of them.
    pub fn copy_style(&mut self, source: &Self) -> usize {
        source
            .property_names()
            .iter()
            .filter(|name| copy_property(self, source, name))
            .count()
    }
}

/// Visual attributes of a drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Corner radius.
    pub corner_radius: f64,
    /// Border width.
    pub border_width: f64,
    /// Border color.
    pub border_color: Color,
    /// Background color.
    pub background_color: Color,
    /// Opacity.
    pub opacity: f32,
    /// Transform.
    pub transform: Transform3D,
    /// Shadow offset.
    pub shadow_offset: Size,
    /// Shadow color.
    pub shadow_color: Color,
    /// Blur radius.
    pub shadow_radius: f64,
    /// Shadow opacity.
    pub shadow_opacity: f32,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            opacity: 1.0,
            transform: Transform3D::IDENTITY,
            shadow_offset: Size {
                width: 0.0,
                height: -3.0,
            },
            shadow_color: Color::BLACK,
            shadow_radius: 3.0,
            shadow_opacity: 0.0,
        }
    }
}

properties! {
    Layer {
        "cornerRadius" => corner_radius: scalar f64,
        "borderWidth" => border_width: scalar f64,
        "borderColor" => border_color: scalar Color,
        "backgroundColor" => background_color: scalar Color,
        "opacity" => opacity: scalar f32,
        "transform" => transform: scalar Transform3D,
        "shadowOffset" => shadow_offset: scalar Size,
        "shadowColor" => shadow_color: scalar Color,
        "shadowRadius" => shadow_radius: scalar f64,
        "shadowOpacity" => shadow_opacity: scalar f32,
    }
}

/// A view: its own properties plus a layout style and a layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct View {
    /// Identifier assigned by the host; never written through properties.
    pub tag: i64,
    /// Identifier used by UI tests.
    pub test_id: String,
    /// Accessibility label.
    pub accessibility_label: String,
    /// Pointer events.
    pub pointer_events: PointerEvents,
    /// Extends the touchable area past the frame.
    pub hit_slop: EdgeInsets,
    /// Position and size in the parent.
    pub frame: Rect,
    /// Excluded from drawing and hit testing.
    pub hidden: bool,
    /// Clips to bounds.
    pub clips_to_bounds: bool,
    /// Gradient stops, evenly spaced.
    pub gradient_colors: Vec<Color>,
    /// Alternating dash and gap lengths of the border stroke.
    pub dash_pattern: Vec<f32>,
    /// Style.
    pub style: LayoutStyle,
    /// Layer.
    pub layer: Layer,
}

impl View {
    /// A default view carrying the given host tag.
    pub fn with_tag(tag: i64) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }
}

properties! {
    View {
        "tag" => tag: readonly i64,
        "testID" => test_id: scalar String,
        "accessibilityLabel" => accessibility_label: scalar String,
        "pointerEvents" => pointer_events: scalar PointerEvents,
        "hitSlop" => hit_slop: scalar EdgeInsets,
        "frame" => frame: scalar Rect,
        "hidden" => hidden: scalar bool,
        "clipsToBounds" => clips_to_bounds: scalar bool,
        "gradientColors" => gradient_colors: array Color,
        "dashPattern" => dash_pattern: array f32,
    }
    children {
        "style" => style,
        "layer" => layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PropValue;

    #[test]
    fn descriptors_match_fields() {
        let view = View::default();
        let tag = view.property("tag").unwrap();
        assert!(!tag.writable);
        assert_eq!(tag.ty.to_string(), "i64");
        assert_eq!(view.property("dashPattern").unwrap().ty.to_string(), "[f32]");
        assert!(view.property("style").is_none());
        assert!(view.child("style").is_some());
        assert!(view.child("frame").is_none());
    }

    #[test]
    fn set_rejects_wrong_type_without_mutation() {
        let mut layer = Layer::default();
        let back = layer.set("opacity", PropValue::new(0.5f64));
        assert!(back.is_err());
        assert_eq!(layer.opacity, 1.0);
        assert!(layer.set("opacity", PropValue::new(0.5f32)).is_ok());
        assert_eq!(layer.opacity, 0.5);
    }

    #[test]
    fn copy_style_copies_everything() {
        let mut src = LayoutStyle::default();
        src.width = 42.0;
        src.flex_direction = FlexDirection::Row;
        src.margin = EdgeInsets::uniform(4.0);

        let mut dst = LayoutStyle::default();
        assert_eq!(dst.copy_style(&src), src.property_names().len());
        assert_eq!(dst.width, 42.0);
        assert_eq!(dst.flex_direction, FlexDirection::Row);
        assert_eq!(dst.margin, EdgeInsets::uniform(4.0));
        assert!(dst.height.is_nan());
    }
}
