//! Spacing scale shared by both dashboards.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One step of the spacing scale, smallest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Zero,
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl Spacing {
    /// Size in CSS pixels.
    pub const fn px(self) -> u16 {
        match self {
            Self::Zero => 0,
            Self::Xxs => 2,
            Self::Xs => 4,
            Self::Sm => 8,
            Self::Md => 12,
            Self::Lg => 16,
            Self::Xl => 24,
            Self::Xxl => 32,
            Self::Xxxl => 48,
        }
    }

    /// CSS length, unitless for zero.
    pub fn css(self) -> String {
        match self.px() {
            0 => "0".to_owned(),
            n => format!("{n}px"),
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}
