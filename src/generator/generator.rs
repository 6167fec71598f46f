use std::{io::Write, path::PathBuf};

use tracing::info;

use crate::{
    utils::{config::Config, file::write_filename, formatter::SourceFormatter},
    GeneratorError,
};

use super::{definition::EnumDefinition, templates::go::render_enum_definition};

pub struct Generator {
    config: Config,
    formatter: SourceFormatter,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let formatter = SourceFormatter::new(&config.formatter);
        Self { config, formatter }
    }

    pub fn with_formatter(mut self, formatter: SourceFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_path()
    }

    pub fn build_definition(&self) -> Result<EnumDefinition, GeneratorError> {
        EnumDefinition::from_config(&self.config)
    }

    /// Renders the artifact without touching the filesystem.
    pub fn render(&self) -> Result<String, GeneratorError> {
        let definition = self.build_definition()?;
        render_enum_definition(&definition)
    }

    /// Writes the rendered artifact to `out` instead of the output path.
    pub fn dry_run(&self, out: &mut impl Write) -> Result<(), GeneratorError> {
        let code = self.render()?;
        out.write_all(code.as_bytes())
            .map_err(|err| GeneratorError::FileWriteError("<stdout>".to_owned(), err.to_string()))
    }

    /// Renders, writes and formats the artifact, returning where it was written.
    pub fn generate(&self) -> Result<PathBuf, GeneratorError> {
        let code = self.render()?;
        let target_file = self.output_path();

        info!("Writing to {}", target_file.display());
        write_filename(&target_file, &code)?;

        if self.formatter.is_enabled() {
            self.formatter.format(&target_file)?;
        }
        Ok(target_file)
    }
}
