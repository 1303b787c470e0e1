use crate::prelude::*;
use crate::prelude::{eprintln, println};
use colored::Colorize;
use fxgen_core::conversation::Conversation;
use fxgen_core::extract::NO_SOLUTION;
use fxgen_core::page::ExtractedFields;
use fxgen_core::prompt::build_prompt;

pub mod fetch;
pub mod llm;

pub use llm::ChatModel;

/// Maximum number of repair round-trips after the initial attempt.
pub const MAX_TRIES: usize = 10;

#[derive(Debug, clap::Parser)]
#[command(name = "gen")]
#[command(about = "Spreadsheet function code generation")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Generate a polars implementation from a documentation URL
    #[clap(name = "from-url")]
    FromUrl(FromUrlOptions),
}

#[derive(Debug, clap::Parser)]
pub struct FromUrlOptions {
    /// Documentation page URL for the spreadsheet function
    pub url: String,

    /// Chat model used for generation
    #[clap(long, env = "FXGEN_MODEL", default_value = "gpt-4o")]
    pub model: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::FromUrl(options) => from_url(options, global).await,
    }
}

async fn from_url(options: FromUrlOptions, global: crate::Global) -> Result<()> {
    // A missing API key must be fatal before any network I/O happens.
    let agent = llm::create_agent(&options.model);

    let client = reqwest::Client::new();
    let html = fetch::fetch_page(&client, &options.url).await?;
    let fields = fxgen_core::page::extract_fields(&html)?;

    if global.verbose {
        eprintln!("{}: {}", "Function".green(), fields.title.trim());
        eprintln!("{}: {}", "Model".green(), options.model);
    }

    let code = generate_method(&agent, &fields, global.verbose).await?;

    println!("{}", code);

    Ok(())
}

/// Run the draft/repair loop until the generated code executes cleanly or
/// the retry budget is exhausted.
///
/// Every iteration appends exactly two turns to the conversation (the user
/// prompt or error report, then the model reply), so later calls see the full
/// history of prior attempts. Terminal outcomes: the last extracted code
/// string on success, or [`NO_SOLUTION`] once [`MAX_TRIES`] repairs have
/// failed. There is no validation beyond "execution raised no fault".
pub async fn generate_method(
    model: &impl ChatModel,
    fields: &ExtractedFields,
    verbose: bool,
) -> Result<String> {
    let mut conversation = Conversation::new();
    conversation.push_user(build_prompt(fields));

    let (mut code, mut error) = attempt(model, &mut conversation, verbose).await?;

    let mut tries = 0;
    while !error.is_empty() && tries < MAX_TRIES {
        conversation.push_user(error.as_str());
        (code, error) = attempt(model, &mut conversation, verbose).await?;
        tries += 1;
    }

    if !error.is_empty() {
        return Ok(NO_SOLUTION.to_string());
    }

    Ok(code)
}

/// One completion round-trip: send the conversation, record the reply, then
/// extract and execute the returned code.
async fn attempt(
    model: &impl ChatModel,
    conversation: &mut Conversation,
    verbose: bool,
) -> Result<(String, String)> {
    let reply = model.send(conversation).await?;
    conversation.push_assistant(reply.as_str());

    // The executor holds the interpreter for the whole run.
    let (code, error) = tokio::task::spawn_blocking(move || crate::exec::execute_script(&reply))
        .await
        .map_err(|e| eyre!("Executor task failed: {}", e))?;

    if verbose {
        eprintln!("{}:\n{}", "To run".green(), code);
        if !error.is_empty() {
            eprintln!("{}: {}", "Error".red(), error);
        }
    }

    Ok((code, error))
}
