use inksac::prelude::*;

/// Renders the interactive prompt. Styling is purely cosmetic and degrades
/// to plain text when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    color_support: ColorSupport,
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn render(&self) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return "> ".to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Green).build();
        format!("{} ", ">".style(prompt_style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ends_with_space() {
        let prompt = Prompt::new();
        assert!(prompt.render().ends_with(' '));
    }

    #[test]
    fn test_render_contains_marker() {
        let prompt = Prompt::new();
        assert!(prompt.render().contains('>'));
    }
}
