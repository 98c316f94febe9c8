//! Enum types of the reference catalog and their JSON names.
//!
//! Raw values are stable and may be sent instead of names.

use crate::enums::catalog_enum;

catalog_enum! {
    /// Horizontal alignment of text within its box.
    TextAlignment default Natural {
        Left = 0,
        Center = 1,
        Right = 2,
        Justified = 3,
        /// Alignment follows the writing direction.
        Natural = 4,
    }
    names {
        "auto" => Natural,
        "left" => Left,
        "center" => Center,
        "right" => Right,
        "justify" => Justified,
    }
}

catalog_enum! {
    /// Base writing direction of text.
    WritingDirection default Natural {
        Natural = -1,
        LeftToRight = 0,
        RightToLeft = 1,
    }
    names {
        "auto" => Natural,
        "ltr" => LeftToRight,
        "rtl" => RightToLeft,
    }
}

catalog_enum! {
    /// Automatic capitalization applied while typing.
    Autocapitalization default None {
        None = 0,
        Words = 1,
        Sentences = 2,
        Characters = 3,
    }
    names {
        "none" => None,
        "words" => Words,
        "sentences" => Sentences,
        "characters" => Characters,
    }
}

catalog_enum! {
    /// When an overlay (such as a clear button) is visible in a text field.
    TextFieldViewMode default Never {
        Never = 0,
        WhileEditing = 1,
        UnlessEditing = 2,
        Always = 3,
    }
    names {
        "never" => Never,
        "while-editing" => WhileEditing,
        "unless-editing" => UnlessEditing,
        "always" => Always,
    }
}

catalog_enum! {
    /// How dragging a scroll view dismisses the keyboard.
    KeyboardDismissMode default None {
        None = 0,
        OnDrag = 1,
        Interactive = 2,
    }
    names {
        "none" => None,
        "on-drag" => OnDrag,
        "interactive" => Interactive,
    }
}

catalog_enum! {
    /// Layout of the on-screen keyboard.
    KeyboardType default Default {
        Default = 0,
        AsciiCapable = 1,
        NumbersAndPunctuation = 2,
        Url = 3,
        NumberPad = 4,
        PhonePad = 5,
        NamePhonePad = 6,
        EmailAddress = 7,
        DecimalPad = 8,
        Twitter = 9,
        WebSearch = 10,
    }
    names {
        "default" => Default,
        "ascii-capable" => AsciiCapable,
        "numbers-and-punctuation" => NumbersAndPunctuation,
        "url" => Url,
        "number-pad" => NumberPad,
        "phone-pad" => PhonePad,
        "name-phone-pad" => NamePhonePad,
        "email-address" => EmailAddress,
        "decimal-pad" => DecimalPad,
        "twitter" => Twitter,
        "web-search" => WebSearch,
        "numeric" => DecimalPad,
    }
}

catalog_enum! {
    /// Label of the keyboard's return key.
    ReturnKeyType default Default {
        Default = 0,
        Go = 1,
        Google = 2,
        Join = 3,
        Next = 4,
        Route = 5,
        Search = 6,
        Send = 7,
        Yahoo = 8,
        Done = 9,
        EmergencyCall = 10,
    }
    names {
        "default" => Default,
        "go" => Go,
        "google" => Google,
        "join" => Join,
        "next" => Next,
        "route" => Route,
        "search" => Search,
        "send" => Send,
        "yahoo" => Yahoo,
        "done" => Done,
        "emergency-call" => EmergencyCall,
    }
}

catalog_enum! {
    /// How content is scaled and positioned inside its bounds.
    ContentMode default ScaleAspectFill {
        ScaleToFill = 0,
        ScaleAspectFit = 1,
        ScaleAspectFill = 2,
        Redraw = 3,
        Center = 4,
        Top = 5,
        Bottom = 6,
        Left = 7,
        Right = 8,
        TopLeft = 9,
        TopRight = 10,
        BottomLeft = 11,
        BottomRight = 12,
    }
    names {
        "scale-to-fill" => ScaleToFill,
        "scale-aspect-fit" => ScaleAspectFit,
        "scale-aspect-fill" => ScaleAspectFill,
        "redraw" => Redraw,
        "center" => Center,
        "top" => Top,
        "bottom" => Bottom,
        "left" => Left,
        "right" => Right,
        "top-left" => TopLeft,
        "top-right" => TopRight,
        "bottom-left" => BottomLeft,
        "bottom-right" => BottomRight,
        "stretch" => ScaleToFill,
        "contain" => ScaleAspectFit,
        "cover" => ScaleAspectFill,
    }
}

catalog_enum! {
    /// Appearance of a navigation or tool bar.
    BarStyle default Default {
        Default = 0,
        Black = 1,
    }
    names {
        "default" => Default,
        "black" => Black,
    }
}

catalog_enum! {
    /// Shape drawn at the ends of open stroked paths.
    LineCap default Butt {
        Butt = 0,
        Round = 1,
        Square = 2,
    }
    names {
        "butt" => Butt,
        "round" => Round,
        "square" => Square,
    }
}

catalog_enum! {
    /// Shape drawn where stroked segments meet.
    LineJoin default Miter {
        Miter = 0,
        Round = 1,
        Bevel = 2,
    }
    names {
        "miter" => Miter,
        "round" => Round,
        "bevel" => Bevel,
    }
}

catalog_enum! {
    /// Stroke thickness of a typeface.
    FontWeight default Regular {
        Thin = 100,
        ExtraLight = 200,
        Light = 300,
        Regular = 400,
        Medium = 500,
        SemiBold = 600,
        Bold = 700,
        ExtraBold = 800,
        Black = 900,
    }
    names {
        "normal" => Regular,
        "bold" => Bold,
        "100" => Thin,
        "200" => ExtraLight,
        "300" => Light,
        "400" => Regular,
        "500" => Medium,
        "600" => SemiBold,
        "700" => Bold,
        "800" => ExtraBold,
        "900" => Black,
    }
}

catalog_enum! {
    /// Slant of a typeface.
    FontStyle default Normal {
        Normal = 0,
        Italic = 1,
    }
    names {
        "normal" => Normal,
        "italic" => Italic,
        "oblique" => Italic,
    }
}

catalog_enum! {
    /// Layout direction of a node, resolved against its parent when inherited.
    Direction default Inherit {
        Inherit = 0,
        Ltr = 1,
        Rtl = 2,
    }
    names {
        "inherit" => Inherit,
        "ltr" => Ltr,
        "rtl" => Rtl,
    }
}

catalog_enum! {
    /// Main axis of a flex container.
    FlexDirection default Column {
        Column = 0,
        ColumnReverse = 1,
        Row = 2,
        RowReverse = 3,
    }
    names {
        "column" => Column,
        "column-reverse" => ColumnReverse,
        "row" => Row,
        "row-reverse" => RowReverse,
    }
}

catalog_enum! {
    /// Distribution of children along the main axis.
    Justify default FlexStart {
        FlexStart = 0,
        Center = 1,
        FlexEnd = 2,
        SpaceBetween = 3,
        SpaceAround = 4,
    }
    names {
        "flex-start" => FlexStart,
        "center" => Center,
        "flex-end" => FlexEnd,
        "space-between" => SpaceBetween,
        "space-around" => SpaceAround,
    }
}

catalog_enum! {
    /// Alignment of children (or of one child) along the cross axis.
    Align default Auto {
        Auto = 0,
        FlexStart = 1,
        Center = 2,
        FlexEnd = 3,
        Stretch = 4,
    }
    names {
        "auto" => Auto,
        "flex-start" => FlexStart,
        "center" => Center,
        "flex-end" => FlexEnd,
        "stretch" => Stretch,
    }
}

catalog_enum! {
    /// Whether a node takes part in its parent's flow.
    PositionType default Relative {
        Relative = 0,
        Absolute = 1,
    }
    names {
        "relative" => Relative,
        "absolute" => Absolute,
    }
}

catalog_enum! {
    /// Whether flex children wrap onto multiple lines.
    FlexWrap default NoWrap {
        NoWrap = 0,
        Wrap = 1,
    }
    names {
        "nowrap" => NoWrap,
        "wrap" => Wrap,
    }
}

catalog_enum! {
    /// Handling of children that extend past a node's bounds.
    Overflow default Visible {
        Visible = 0,
        Hidden = 1,
        Scroll = 2,
    }
    names {
        "visible" => Visible,
        "hidden" => Hidden,
        "scroll" => Scroll,
    }
}

catalog_enum! {
    /// Which of a view and its subviews can be the target of touches.
    PointerEvents default Auto {
        Auto = 0,
        None = 1,
        BoxOnly = 2,
        BoxNone = 3,
    }
    names {
        "auto" => Auto,
        "none" => None,
        "box-only" => BoxOnly,
        "box-none" => BoxNone,
    }
}

catalog_enum! {
    /// Timing curve of an animated layout change.
    AnimationType default EaseInEaseOut {
        Spring = 0,
        Linear = 1,
        EaseInEaseOut = 2,
        EaseIn = 3,
        EaseOut = 4,
        Keyboard = 5,
    }
    names {
        "spring" => Spring,
        "linear" => Linear,
        "easeInEaseOut" => EaseInEaseOut,
        "easeIn" => EaseIn,
        "easeOut" => EaseOut,
        "keyboard" => Keyboard,
    }
}

#[cfg(test)]
mod tests {
    use std::{fmt::Debug, sync::Arc};

    use serde_json::{Value, json};

    use super::*;
    use crate::{
        convert::{Convert, convert},
        diagnostics::{RecordingLog, with_sink},
        enums::ConvertEnum,
    };

    #[test]
    fn aliases_share_a_variant() {
        assert_eq!(convert::<ContentMode>(&json!("cover")), ContentMode::ScaleAspectFill);
        assert_eq!(convert::<ContentMode>(&json!("stretch")), ContentMode::ScaleToFill);
        assert_eq!(convert::<FontStyle>(&json!("oblique")), FontStyle::Italic);
        assert_eq!(convert::<KeyboardType>(&json!("numeric")), KeyboardType::DecimalPad);
    }

    #[test]
    fn raw_values_pass_through() {
        assert_eq!(convert::<FontWeight>(&json!(700)), FontWeight::Bold);
        assert_eq!(convert::<FontWeight>(&json!("700")), FontWeight::Bold);
        assert_eq!(convert::<WritingDirection>(&json!(-1)), WritingDirection::Natural);
        assert_eq!(FlexDirection::RowReverse.raw(), 3);
    }

    #[test]
    fn invalid_input_falls_back_to_default() {
        let log = Arc::new(RecordingLog::new());
        with_sink(log.clone(), || {
            assert_eq!(convert::<FontWeight>(&json!(450)), FontWeight::Regular);
            assert_eq!(convert::<Justify>(&json!("Center")), Justify::FlexStart);
            assert_eq!(convert::<Overflow>(&json!(false)), Overflow::Visible);
        });
        assert_eq!(log.type_names(), vec!["FontWeight", "Justify", "Overflow"]);
    }

    #[test]
    fn every_catalog_default_is_a_named_member() {
        fn check<E: ConvertEnum + Convert + PartialEq + Debug>() {
            let conv = E::converter();
            assert_eq!(E::fallback().raw(), conv.default_raw());
            assert!(conv.table().contains_raw(conv.default_raw()), "{}", E::NAME);
            assert_eq!(convert::<E>(&Value::Null), E::fallback());
        }
        check::<TextAlignment>();
        check::<WritingDirection>();
        check::<Autocapitalization>();
        check::<TextFieldViewMode>();
        check::<KeyboardDismissMode>();
        check::<KeyboardType>();
        check::<ReturnKeyType>();
        check::<ContentMode>();
        check::<BarStyle>();
        check::<LineCap>();
        check::<LineJoin>();
        check::<FontWeight>();
        check::<FontStyle>();
        check::<Direction>();
        check::<FlexDirection>();
        check::<Justify>();
        check::<Align>();
        check::<PositionType>();
        check::<FlexWrap>();
        check::<Overflow>();
        check::<PointerEvents>();
        check::<AnimationType>();
    }
}
