use crate::error::EmitError;
use crate::selector::Selector;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Generates a .c / .cpp source file at the provided destination
#[derive(Parser, Debug)]
#[command(name = "hello-emitter", version)]
pub struct Args {
    /// Flavour of source file to generate
    #[arg(long = "source_type", alias = "source-type", value_enum, value_name = "TYPE")]
    pub source_type: Selector,

    /// Path of the file to write; an existing file is overwritten
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub destination: PathBuf,
}

/// A validated request to emit one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub selector: Selector,
    pub destination: PathBuf,
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        Invocation {
            selector: args.source_type,
            destination: args.destination,
        }
    }
}

/// Parses process-style arguments (the first item is the program name).
pub fn resolve_arguments<I, T>(args: I) -> Result<Invocation, EmitError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    Ok(args.into())
}

/// Formats the confirmation lines echoed before the file is written.
pub fn confirmation(invocation: &Invocation) -> String {
    format!(
        "Source Type {}\nDestination {}",
        invocation.selector,
        invocation.destination.display()
    )
}
