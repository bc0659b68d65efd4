//! Name stylization for projected identifiers.

/// Standard prefix applied to projected type names.
pub const DEFAULT_PREFIX: &str = "Canvas";

/// Converts schema identifiers into projected names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStylizer {
    prefix: String,
}

impl Default for NameStylizer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl NameStylizer {
    /// Creates a stylizer using the given standard prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the standard prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `name` with the standard prefix applied.
    #[must_use]
    pub fn prefixed(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Prefix plus the underscore-stylized form of `name`.
    #[must_use]
    pub fn projected_type_name(&self, name: &str) -> String {
        self.prefixed(&stylize_from_underscores(name))
    }
}

/// Converts `UNDERSCORE_SEPARATED` identifiers to `CapitalizedWords`.
///
/// Each piece keeps its first character upper-cased and the rest lower-cased,
/// so `MATRIX_3X2_F` becomes `Matrix3x2F`.
#[must_use]
pub fn stylize_from_underscores(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for piece in s.split('_').filter(|p| !p.is_empty()) {
        let mut chars = piece.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }

    result
}

/// Upper-cases the leading letter of a field name, dropping leading
/// underscores: `_foo` and `foo` both become `Foo`.
#[must_use]
pub fn stylize_with_capital_leading_letter(s: &str) -> String {
    let trimmed = s.trim_start_matches('_');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylize_from_underscores() {
        assert_eq!(stylize_from_underscores("MATRIX_3X2_F"), "Matrix3x2F");
        assert_eq!(stylize_from_underscores("POINT_2F"), "Point2f");
        assert_eq!(stylize_from_underscores("Point"), "Point");
        assert_eq!(stylize_from_underscores("__LEADING"), "Leading");
        assert_eq!(stylize_from_underscores(""), "");
    }

    #[test]
    fn test_stylize_with_capital_leading_letter() {
        assert_eq!(stylize_with_capital_leading_letter("foo"), "Foo");
        assert_eq!(stylize_with_capital_leading_letter("_foo"), "Foo");
        assert_eq!(stylize_with_capital_leading_letter("radiusX"), "RadiusX");
        assert_eq!(stylize_with_capital_leading_letter("_"), "");
    }

    #[test]
    fn test_projected_type_name() {
        let stylizer = NameStylizer::default();
        assert_eq!(stylizer.prefix(), "Canvas");
        assert_eq!(stylizer.projected_type_name("ELLIPSE"), "CanvasEllipse");

        let custom = NameStylizer::new("Geo");
        assert_eq!(custom.projected_type_name("Point"), "GeoPoint");
        assert_eq!(custom.prefixed("Shape"), "GeoShape");
    }
}
