use std::fmt;

/// Visual treatment used to obscure the screen. A closed union so the
/// parameter requirements are checked once, at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectionStyle {
    None,
    Blur,
    Color(String),
    Image(String),
}

impl ProtectionStyle {
    /// Build a style from loosely typed command arguments. `color` is
    /// required for `color`, `asset` for `image`; blank values count as
    /// missing.
    pub fn from_parts(
        style: &str,
        color: Option<&str>,
        asset: Option<&str>,
    ) -> Result<Self, StyleError> {
        match style {
            "none" => Ok(Self::None),
            "blur" => Ok(Self::Blur),
            "color" => color
                .map(str::trim)
                .filter(|hex| !hex.is_empty())
                .map(|hex| Self::Color(hex.to_string()))
                .ok_or(StyleError::MissingColor),
            "image" => asset
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| Self::Image(name.to_string()))
                .ok_or(StyleError::MissingAsset),
            other => Err(StyleError::UnknownStyle(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Blur => "blur",
            Self::Color(_) => "color",
            Self::Image(_) => "image",
        }
    }
}

impl fmt::Display for ProtectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(hex) => write!(f, "color({hex})"),
            Self::Image(asset) => write!(f, "image({asset})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// What is actually applied on screen right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppliedProtection {
    #[default]
    Unapplied,
    Applied(ProtectionStyle),
}

impl AppliedProtection {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    UnknownStyle(String),
    MissingColor,
    MissingAsset,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyle(style) => write!(f, "unknown protection style '{style}'"),
            Self::MissingColor => f.write_str("style 'color' requires a hex color argument"),
            Self::MissingAsset => f.write_str("style 'image' requires an asset image argument"),
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_variant_parses_with_its_arguments() {
        assert_eq!(
            ProtectionStyle::from_parts("none", None, None),
            Ok(ProtectionStyle::None)
        );
        assert_eq!(
            ProtectionStyle::from_parts("blur", None, None),
            Ok(ProtectionStyle::Blur)
        );
        assert_eq!(
            ProtectionStyle::from_parts("color", Some("#FF0000"), None),
            Ok(ProtectionStyle::Color("#FF0000".to_string()))
        );
        assert_eq!(
            ProtectionStyle::from_parts("image", None, Some("assets/cover.png")),
            Ok(ProtectionStyle::Image("assets/cover.png".to_string()))
        );
    }

    #[test]
    fn missing_or_blank_parameters_are_rejected() {
        assert_eq!(
            ProtectionStyle::from_parts("color", None, None),
            Err(StyleError::MissingColor)
        );
        assert_eq!(
            ProtectionStyle::from_parts("color", Some("   "), None),
            Err(StyleError::MissingColor)
        );
        assert_eq!(
            ProtectionStyle::from_parts("image", Some("#FF0000"), None),
            Err(StyleError::MissingAsset)
        );
    }

    #[test]
    fn unknown_style_names_are_rejected() {
        assert_eq!(
            ProtectionStyle::from_parts("sparkle", None, None),
            Err(StyleError::UnknownStyle("sparkle".to_string()))
        );
    }
}
