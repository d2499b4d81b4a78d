//! Recursive include expansion for amalg-core

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::directive::IncludeDirective;

/// Pre-order depth-first include expander.
///
/// Each recognized directive line is replaced by the full recursive expansion
/// of its target before the next line of the including file is processed.
/// Targets resolve relative to the directory of the file the directive
/// appears in.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    directive: IncludeDirective,
}

impl Expander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in an alternate include convention.
    pub fn with_directive(mut self, directive: IncludeDirective) -> Self {
        self.directive = directive;
        self
    }

    /// Expand `root` into `w`.
    ///
    /// Lines reach the writer in the exact order a depth-first, pre-order
    /// traversal of the include graph encounters them, trailing whitespace
    /// stripped and a single `\n` appended. Revisiting a file that is still
    /// on the active expansion stack fails with a cyclic-include error.
    pub fn expand(&self, root: &Path, mut w: impl Write) -> Result<()> {
        let mut active = Vec::new();
        self.expand_into(root, &mut w, &mut active)
    }

    fn expand_into(
        &self,
        path: &Path,
        w: &mut dyn Write,
        active: &mut Vec<PathBuf>,
    ) -> Result<()> {
        // Canonical identity, so the same file reached through different
        // relative spellings still trips cycle detection.
        let identity =
            fs::canonicalize(path).with_context(|| format!("resolving {}", path.display()))?;

        if active.contains(&identity) {
            return Err(anyhow!("cyclic include: {}", path.display()));
        }

        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();

        active.push(identity);
        let outcome = self.expand_lines(&parent, BufReader::new(file), w, active);
        active.pop();
        outcome
    }

    fn expand_lines(
        &self,
        parent: &Path,
        reader: impl BufRead,
        w: &mut dyn Write,
        active: &mut Vec<PathBuf>,
    ) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();

            if let Some(rel) = self.directive.target(line) {
                self.expand_into(&parent.join(rel), w, active)?;
            } else {
                writeln!(w, "{line}")?;
            }
        }

        Ok(())
    }
}

/// Expand `input` into a newly created (or truncated) `output` file.
///
/// The destination is opened once for the whole run and flushed before
/// returning. On failure the file, if created, may be left truncated.
pub fn expand_file(input: &Path, output: &Path) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let mut w = BufWriter::new(file);

    Expander::new().expand(input, &mut w)?;

    w.flush()
        .with_context(|| format!("flushing {}", output.display()))
}
