use medterm_schema::SchemaOptions;

use super::Context;

pub struct SchemaInput {
    pub options: SchemaOptions,
    pub ctx: Context,
}

/// Strategy that prints a page's JSON-LD description.
#[derive(Debug, Clone, Copy)]
pub struct SchemaStrategy;

impl super::CommandStrategy for SchemaStrategy {
    type Input = SchemaInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let page = input
            .ctx
            .engine
            .generate_medical_webpage_schema(&input.options)?;
        println!("{}", serde_json::to_string_pretty(&page.to_json_ld())?);
        Ok(())
    }
}
