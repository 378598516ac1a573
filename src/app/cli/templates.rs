//! Catalog listing commands.

use clap::Subcommand;

use crate::app::api::{self, RuntimeOptions};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// List prompt categories
    #[clap(visible_alias = "ls")]
    List,
    /// Print the stock template for a category
    Show {
        /// Category display name or slug
        category: String,
    },
}

pub fn run_templates(runtime: &RuntimeOptions, command: TemplatesCommands) -> Result<(), AppError> {
    match command {
        TemplatesCommands::List => {
            println!("Available categories:");
            for entry in api::templates(runtime)? {
                let marker = if entry.is_default { " (default)" } else { "" };
                println!("  {} - {}{}", entry.category.slug(), entry.category, marker);
            }
        }
        TemplatesCommands::Show { category } => {
            let (_, text) = api::template(&category)?;
            println!("{}", text);
        }
    }
    Ok(())
}

pub fn run_models(runtime: &RuntimeOptions) -> Result<(), AppError> {
    println!("Available models:");
    for entry in api::models(runtime)? {
        let marker = if entry.is_default { " (default)" } else { "" };
        println!("  {}{}", entry.id, marker);
    }
    Ok(())
}
