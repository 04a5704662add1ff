use std::io::{self, Write};

use clap::Args;
use eyre::{Context, Result};
use javadsl_core::Indent;
use javadsl_java::{JavaContext, render_with, sample_class};

const BANNER: &str = "The source code is";

#[derive(Args)]
pub struct GenerateCommand {
    /// Name of the generated class
    #[arg(long, default_value = "Kattskit")]
    pub class_name: String,

    /// Indentation per nesting level: a space count (1-8) or `tab`
    #[arg(long, default_value_t = Indent::default())]
    pub indent: Indent,

    /// Print only the generated source
    #[arg(long)]
    pub no_banner: bool,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            class_name: "Kattskit".to_string(),
            indent: Indent::default(),
            no_banner: false,
        }
    }
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
            .wrap_err("Failed to write generated source")
    }

    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        tracing::info!(class = %self.class_name, indent = %self.indent, "generating sample class");

        let ctx = JavaContext::new(self.indent);
        let source = render_with(&ctx, &sample_class(self.class_name.as_str()));

        if !self.no_banner {
            writeln!(out, "{BANNER}")?;
        }
        writeln!(out, "{source}")?;
        Ok(())
    }
}
