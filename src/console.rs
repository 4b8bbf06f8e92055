//! Console status output
//!
//! Status lines ("Checking", "Found", "Not found") are printed from many
//! concurrent fetches. A single [`Console`] is created in `main` and shared
//! as `Arc<Console>`; its mutex is held only while one line is written, so
//! lines never interleave and fetch work is never blocked on it.

use colored::{Color, Colorize};
use std::io::Write;
use std::sync::Mutex;

const RULE: &str =
    "-------------------------------------------------------------------------------";

const BANNER: &[&str] = &[
    r#"                                          88"#,
    r#"                                          88"#,
    r#"                                          88"#,
    r#"88,dPYba,,adPYba,  ,adPPYYba, 8b,dPPYba,  88,dPPYba,   ,adPPYba,  8b       d8"#,
    r#"88P'   "88"    "8a ""     `Y8 88P'    "8a 88P'    "8a a8"     "8a `8b     d8'"#,
    r#"88      88      88 ,adPPPPP88 88       d8 88       d8 8b       d8  `8b   d8'"#,
    r#"88      88      88 88,    ,88 88b,   ,a8" 88b,   ,a8" "8a,   ,a8"   `8b,d8'"#,
    r#"88      88      88 `"8bbdP"Y8 88`YbbdP"'  8Y"Ybbd8"'   `"YbbdP"'      Y88'"#,
    r#"                              88                                      d8'"#,
    r#"                              88                                     d8'"#,
];

/// Process-wide console writer
#[derive(Debug)]
pub struct Console {
    color: bool,
    quiet: bool,
    lock: Mutex<()>,
}

impl Console {
    /// Creates a console writer
    ///
    /// # Arguments
    ///
    /// * `color` - Whether status lines are colorized
    /// * `quiet` - Suppress all status output
    pub fn new(color: bool, quiet: bool) -> Self {
        Self {
            color,
            quiet,
            lock: Mutex::new(()),
        }
    }

    /// A console that prints nothing
    pub fn silent() -> Self {
        Self::new(false, true)
    }

    pub fn banner(&self) {
        let mut lines: Vec<String> = BANNER
            .iter()
            .map(|line| self.paint(line, Color::BrightMagenta))
            .collect();
        lines.push(self.paint(
            &format!("{:>79}", concat!("build ", env!("CARGO_PKG_VERSION"))),
            Color::BrightYellow,
        ));
        lines.push(self.paint(RULE, Color::BrightWhite));
        self.emit(&lines.join("\n"));
    }

    pub fn rule(&self) {
        self.emit(&self.paint(RULE, Color::BrightWhite));
    }

    pub fn checking(&self, url: &str) {
        self.emit(&format!("Checking: {}...", url));
    }

    pub fn found(&self, url: &str) {
        self.emit(&self.paint(&format!("{} Found! Extracting...", url), Color::Green));
    }

    pub fn not_found(&self, url: &str) {
        self.emit(&self.paint(&format!("{} Not found! Skipping...", url), Color::Yellow));
    }

    pub fn failed(&self, url: &str, reason: &str) {
        self.emit(&self.paint(&format!("{} Failed: {}", url, reason), Color::Red));
    }

    pub fn wrote(&self, path: &str, rows: usize) {
        self.emit(&self.paint(&format!("Wrote {} rows to {}", rows, path), Color::Cyan));
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&self, line: &str) {
        if self.quiet {
            return;
        }

        // A poisoned lock only means another print panicked; the guard protects no data.
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true, false)
    }
}
