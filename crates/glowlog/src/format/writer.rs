//! Output buffer that applies theme styles and tracks visible width.

use glowlog_template::Alignment;

use crate::theme::{Theme, ThemeClass};
use crate::util::{display_width, push_spaces};

/// Writes themed fragments into a string.
///
/// The writer counts the display width of everything it writes, excluding
/// escape sequences, so alignment can be computed on what the user sees.
pub struct ThemedWriter<'a> {
    out: &'a mut String,
    theme: &'a Theme,
    width: usize,
}

impl<'a> ThemedWriter<'a> {
    pub fn new(out: &'a mut String, theme: &'a Theme) -> Self {
        Self {
            out,
            theme,
            width: 0,
        }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Display width written so far.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Writes unstyled text.
    pub fn write(&mut self, text: &str) {
        self.width += display_width(text);
        self.out.push_str(text);
    }

    /// Writes text wrapped in the style of `class`.
    pub fn write_styled(&mut self, class: ThemeClass, text: &str) {
        let style = self.theme.style(class);
        if style.is_empty() || text.is_empty() {
            self.write(text);
            return;
        }
        self.out.push_str(style.start());
        self.write(text);
        self.out.push_str(style.end());
    }

    /// Writes a single-class value with padding inside the style run.
    pub fn write_styled_aligned(
        &mut self,
        class: ThemeClass,
        text: &str,
        alignment: Option<Alignment>,
    ) {
        let Some(alignment) = alignment else {
            self.write_styled(class, text);
            return;
        };
        let padding = alignment.padding_for(display_width(text));
        let mut padded = String::with_capacity(text.len() + padding.left + padding.right);
        push_spaces(&mut padded, padding.left);
        padded.push_str(text);
        push_spaces(&mut padded, padding.right);
        self.write_styled(class, &padded);
    }

    /// Renders a composite fragment and pads it to the alignment width.
    ///
    /// Padding goes outside the fragment's own style runs.
    pub fn aligned<F>(&mut self, alignment: Option<Alignment>, render: F)
    where
        F: FnOnce(&mut ThemedWriter<'_>),
    {
        let Some(alignment) = alignment else {
            render(self);
            return;
        };

        let mut buffer = String::new();
        let width = {
            let mut inner = ThemedWriter::new(&mut buffer, self.theme);
            render(&mut inner);
            inner.width
        };

        let padding = alignment.padding_for(width);
        push_spaces(self.out, padding.left);
        self.out.push_str(&buffer);
        push_spaces(self.out, padding.right);
        self.width += padding.left + width + padding.right;
    }
}
