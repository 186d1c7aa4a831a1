use inksac::prelude::*;
use std::io::IsTerminal;

/// Colours diagnostics on standard error when the terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct MessageStyler {
    color_support: ColorSupport,
}

impl Default for MessageStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStyler {
    pub fn new() -> Self {
        let support = if std::io::stderr().is_terminal() {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let warning_style = Style::builder().foreground(Color::Yellow).build();
        message.style(warning_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_leaves_text_alone() {
        let styler = MessageStyler::plain();
        assert_eq!(styler.error("shell: boom"), "shell: boom");
        assert_eq!(styler.warning("careful"), "careful");
    }
}
