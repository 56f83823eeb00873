//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations only decide where lines and warnings go; the layout of
/// each element is shared.
pub trait Output {
    /// Write one line of report text.
    fn line(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{}: {}", key, value));
    }

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {}", text));
    }

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str) {
        self.line(&format!("── {} ──", label));
    }

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output. Warnings go to stderr, everything else to stdout.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }
}

/// Output captured into a string, warnings included, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput(pub String);

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push('\n');
    }

    fn warning(&mut self, msg: &str) {
        self.line(&format!("warning: {}", msg));
    }
}
