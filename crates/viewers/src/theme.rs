//! Report colours.

/// Colour scheme for charts and the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub background: &'static str,
    pub table_highlight: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub white: &'static str,
    /// Cycled per bar or slice; Chart.js wraps when there are more items
    pub chart_colors: [&'static str; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#DC6D18",
            background: "#FFF4E4",
            table_highlight: "#F8E0C9",
            text: "#2B1A12",
            border: "#B1AA81",
            white: "#FFFFFF",
            chart_colors: [
                "#DC6D18", // primary
                "#B1AA81", // border
                "#F8E0C9", // table highlight
                "#2B1A12", // text
                "#FFB067", // lighter primary
                "#8C5A1C", // darker primary
            ],
        }
    }
}

/// Append a two-digit hex alpha to a `#RRGGBB` colour.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{}{}", color, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha(Theme::default().primary, "20"), "#DC6D1820");
    }
}
