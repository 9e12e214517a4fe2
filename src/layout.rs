//! Form layout modes and grid column specs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::class_names::ClassNames;
use crate::error::FormError;
use crate::prefix::prefix_cls;

// ============================================================================
// Form Layout
// ============================================================================

/// How labels and controls of a form are arranged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    #[default]
    Horizontal,
    Inline,
    Vertical,
}

impl FormLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormLayout::Horizontal => "horizontal",
            FormLayout::Inline => "inline",
            FormLayout::Vertical => "vertical",
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, FormLayout::Vertical)
    }
}

impl fmt::Display for FormLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormLayout {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(FormLayout::Horizontal),
            "inline" => Ok(FormLayout::Inline),
            "vertical" => Ok(FormLayout::Vertical),
            other => Err(FormError::UnknownLayout(other.to_string())),
        }
    }
}

// ============================================================================
// Label Alignment
// ============================================================================

/// Horizontal alignment of field labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    Left,
    #[default]
    Right,
}

impl LabelAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelAlign::Left => "left",
            LabelAlign::Right => "right",
        }
    }
}

impl FromStr for LabelAlign {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(LabelAlign::Left),
            "right" => Ok(LabelAlign::Right),
            other => Err(FormError::UnknownLabelAlign(other.to_string())),
        }
    }
}

// ============================================================================
// Grid Columns
// ============================================================================

/// Column sizing at one responsive breakpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColSize {
    #[serde(default)]
    pub span: Option<u8>,
    #[serde(default)]
    pub offset: Option<u8>,
    #[serde(default)]
    pub order: Option<u8>,
    #[serde(default)]
    pub push: Option<u8>,
    #[serde(default)]
    pub pull: Option<u8>,
}

impl From<u8> for ColSize {
    fn from(span: u8) -> Self {
        ColSize {
            span: Some(span),
            ..Default::default()
        }
    }
}

/// Breakpoints in ascending width order
pub const BREAKPOINTS: [&str; 6] = ["xs", "sm", "md", "lg", "xl", "xxl"];

/// Grid column spec used for label and wrapper columns.
///
/// Produces the `ant-col-*` classes the grid stylesheet understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColProps {
    #[serde(default)]
    pub span: Option<u8>,
    #[serde(default)]
    pub offset: Option<u8>,
    #[serde(default)]
    pub order: Option<u8>,
    #[serde(default)]
    pub push: Option<u8>,
    #[serde(default)]
    pub pull: Option<u8>,
    #[serde(default)]
    pub xs: Option<ColSize>,
    #[serde(default)]
    pub sm: Option<ColSize>,
    #[serde(default)]
    pub md: Option<ColSize>,
    #[serde(default)]
    pub lg: Option<ColSize>,
    #[serde(default)]
    pub xl: Option<ColSize>,
    #[serde(default)]
    pub xxl: Option<ColSize>,
    /// Extra class appended after the grid classes
    #[serde(default)]
    pub class_name: Option<String>,
}

impl ColProps {
    pub fn span(span: u8) -> Self {
        ColProps {
            span: Some(span),
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: u8) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: &str, size: impl Into<ColSize>) -> Self {
        let size = Some(size.into());
        match breakpoint {
            "xs" => self.xs = size,
            "sm" => self.sm = size,
            "md" => self.md = size,
            "lg" => self.lg = size,
            "xl" => self.xl = size,
            "xxl" => self.xxl = size,
            other => tracing::warn!("Ignoring unknown grid breakpoint: {}", other),
        }
        self
    }

    fn breakpoints(&self) -> [(&'static str, Option<&ColSize>); 6] {
        [
            (BREAKPOINTS[0], self.xs.as_ref()),
            (BREAKPOINTS[1], self.sm.as_ref()),
            (BREAKPOINTS[2], self.md.as_ref()),
            (BREAKPOINTS[3], self.lg.as_ref()),
            (BREAKPOINTS[4], self.xl.as_ref()),
            (BREAKPOINTS[5], self.xxl.as_ref()),
        ]
    }

    /// Grid classes for this column, without the caller's extra class.
    ///
    /// At the top level a zero offset/order/push/pull is omitted, a zero span
    /// is kept (it hides the column). Breakpoint entries keep explicit zeros.
    pub fn grid_classes(&self, custom_prefix: Option<&str>) -> ClassNames {
        let prefix = prefix_cls("col", custom_prefix);
        let nonzero = |v: Option<u8>| v.filter(|v| *v != 0);

        let mut classes = ClassNames::with(prefix.clone());
        classes = classes.add_opt(self.span.map(|span| format!("{}-{}", prefix, span)));
        classes = classes.add_opt(nonzero(self.order).map(|v| format!("{}-order-{}", prefix, v)));
        classes = classes.add_opt(nonzero(self.offset).map(|v| format!("{}-offset-{}", prefix, v)));
        classes = classes.add_opt(nonzero(self.push).map(|v| format!("{}-push-{}", prefix, v)));
        classes = classes.add_opt(nonzero(self.pull).map(|v| format!("{}-pull-{}", prefix, v)));

        for (name, size) in self.breakpoints() {
            let Some(size) = size else { continue };
            classes = classes
                .add_opt(size.span.map(|v| format!("{}-{}-{}", prefix, name, v)))
                .add_opt(size.order.map(|v| format!("{}-{}-order-{}", prefix, name, v)))
                .add_opt(size.offset.map(|v| format!("{}-{}-offset-{}", prefix, name, v)))
                .add_opt(size.push.map(|v| format!("{}-{}-push-{}", prefix, name, v)))
                .add_opt(size.pull.map(|v| format!("{}-{}-pull-{}", prefix, name, v)));
        }

        classes
    }

    /// Full class list: grid classes followed by the extra class
    pub fn class_names(&self, custom_prefix: Option<&str>) -> ClassNames {
        self.grid_classes(custom_prefix)
            .add_opt(self.class_name.clone())
    }
}
