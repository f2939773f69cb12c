use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    author = "Gokul <@bahdotsh>",
    version = env!("CARGO_PKG_VERSION"),
    about = "snipex - A text snippet expansion engine",
    long_about = "snipex stores trigger/replacement snippets and resolves the %\\n, %\\t, %\\s and %\\e markers in their replacements."
)]
pub struct Snipex {
    #[clap(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the markers in a replacement and show the result
    Resolve {
        #[clap(help = "Raw replacement text")]
        raw: String,

        #[clap(long, help = "Print the result as JSON")]
        json: bool,
    },
    /// Add a new text snippet
    Add {
        #[clap(long, short = 's', help = "Shortcut for the snippet")]
        shortcut: String,

        #[clap(
            long = "snippet",
            short = 'c',
            required = true,
            help = "The snippet text; repeat for multiple candidates"
        )]
        replacements: Vec<String>,
    },
    /// Delete a text snippet by shortcut
    Delete {
        #[clap(long, short, help = "Shortcut of the snippet to delete")]
        shortcut: String,
    },
    /// Update an existing snippet by shortcut
    Update {
        #[clap(long, short = 's', help = "Shortcut of the snippet to update")]
        shortcut: String,

        #[clap(
            long = "snippet",
            short = 'c',
            required = true,
            help = "New snippet text; repeat for multiple candidates"
        )]
        replacements: Vec<String>,
    },
    /// List all snippets with their type
    List {
        #[clap(long, help = "Print the snippets as JSON")]
        json: bool,
    },
    /// Show how the text typed so far would expand
    Expand {
        #[clap(help = "Text typed so far; the caret is at its end")]
        buffer: String,

        #[clap(long, short = 'n', default_value = "0", help = "Replacement candidate to use")]
        choice: usize,

        #[clap(long, help = "Print the plan as JSON")]
        json: bool,
    },
    /// List the snippet types and their ordinals
    Types,
    /// Show the path of the snippet database
    Path,
}
