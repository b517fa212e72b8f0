use alloc::borrow::Cow;
use core::fmt;

/// Which viewport edge a tracker pins to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    Header,
    Footer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

/// A measured item layout, in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The renderer dispatch key for an item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutType {
    Id(u32),
    Name(Cow<'static, str>),
}

impl From<u32> for LayoutType {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&'static str> for LayoutType {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<alloc::string::String> for LayoutType {
    fn from(name: alloc::string::String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A raw scroll event as reported by the host's scroll view.
///
/// The coordinator never inspects it; it is handed to the embedding application's scroll
/// listener exactly as received.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub content_offset: Point,
    pub layout_measurement: Option<Dimension>,
    pub content_size: Option<Dimension>,
}

impl ScrollEvent {
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self {
            content_offset: Point {
                x: offset_x,
                y: offset_y,
            },
            layout_measurement: None,
            content_size: None,
        }
    }
}

/// Passthrough styling for the container view.
///
/// Not part of the coordination logic; `flex` defaults to `1.0` so the container fills its
/// parent when no style is supplied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerStyle {
    pub flex: f32,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            flex: 1.0,
            width: None,
            height: None,
        }
    }
}
