use bashopts_core::{lines::INDENT, Line, Lines, Spec};
use tracing::debug;

use crate::Config;

mod case;
mod frame;

/// Assembles the option-parsing routine for a list of specs.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    config: Config,
    lines: Lines,
}

impl CodeGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            lines: Lines::new(),
        }
    }

    /// Generate the routine for `specs`.
    ///
    /// Variable names follow the generator's mode, whatever scope the specs were parsed with.
    pub fn generate(&mut self, specs: &[Spec]) {
        debug!(
            specs = specs.len(),
            global = self.config.global,
            binding = self.config.binding,
            "generating option parser"
        );
        let specs: Vec<Spec> = specs
            .iter()
            .cloned()
            .map(|spec| spec.with_global(self.config.global))
            .collect();

        self.lines.append(frame::header(&self.config, &specs));
        for spec in &specs {
            self.lines.append(case::case(spec).indent(2));
        }
        self.lines.append(frame::footer(&self.config));
    }

    /// The generated lines so far.
    pub fn lines(&self) -> &[Line] {
        self.lines.lines()
    }

    /// Get the generated code.
    pub fn output(&self) -> String {
        self.lines.render(INDENT)
    }
}
