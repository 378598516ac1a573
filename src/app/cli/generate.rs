//! One-shot generate command.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, GenerateOptions, GenerateOutcome, RuntimeOptions};
use crate::domain::{AppError, FieldValues};

#[derive(Args)]
pub struct GenerateArgs {
    /// Subject's first name
    #[arg(long, default_value = "")]
    first_name: String,
    /// Subject's last name
    #[arg(long, default_value = "")]
    last_name: String,
    /// Subject's city
    #[arg(long, default_value = "")]
    city: String,
    /// Subject's state
    #[arg(long, default_value = "")]
    state: String,
    /// Prompt category (display name or slug; defaults to config)
    #[arg(short, long)]
    category: Option<String>,
    /// Model identifier (defaults to config)
    #[arg(short, long)]
    model: Option<String>,
    /// Use this file as the template instead of the stock text
    #[arg(short = 't', long)]
    template_file: Option<PathBuf>,
    /// Print the rendered prompt without calling the API
    #[arg(long)]
    prompt_preview: bool,
}

pub fn run_generate(runtime: &RuntimeOptions, args: GenerateArgs) -> Result<(), AppError> {
    let options = GenerateOptions {
        fields: FieldValues::new(args.first_name, args.last_name, args.city, args.state),
        category: args.category,
        model: args.model,
        template_file: args.template_file,
        prompt_preview: args.prompt_preview,
    };

    match api::generate(runtime, options)? {
        GenerateOutcome::Preview { category, request } => {
            eprintln!("Prompt preview ({}, {}):", category, request.model);
            println!("{}", request.prompt);
        }
        GenerateOutcome::Completed { category, generation } => {
            eprintln!(
                "✅ Response generated successfully! ({}, {})",
                category, generation.request.model
            );
            println!("{}", generation.response);
        }
    }
    Ok(())
}
