use medterm_core::Locale;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use super::Context;

/// Input for the Annotate command.
///
/// Text comes from `text`, else from `file`, else from standard input.
pub struct AnnotateInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub locale: Locale,
    pub ctx: Context,
}

impl AnnotateInput {
    fn read_text(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
        if let Some(text) = text {
            return Ok(text);
        }
        if let Some(path) = file {
            info!("Reading {}", path.display());
            return std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e));
        }

        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Strategy that prints the input with every recognized term wrapped in
/// metadata markup.
#[derive(Debug, Clone, Copy)]
pub struct AnnotateStrategy;

impl super::CommandStrategy for AnnotateStrategy {
    type Input = AnnotateInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let AnnotateInput {
            text,
            file,
            locale,
            ctx,
        } = input;
        let text = AnnotateInput::read_text(text, file)?;
        print!("{}", ctx.engine.mark_medical_terms_in_text(&text, locale));
        if !text.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
