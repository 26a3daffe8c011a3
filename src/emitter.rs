use crate::cli::{confirmation, resolve_arguments, Invocation};
use crate::error::EmitError;
use crate::selector::Selector;
use crate::template::template_for;
use log::{debug, info};
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `body` to `destination`, creating the file or truncating an existing one.
///
/// The handle is closed when this function returns, whether or not the write succeeded.
pub fn write_template(body: &str, destination: &Path) -> Result<(), EmitError> {
    let write_error = |source| EmitError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let mut file = File::create(destination).map_err(write_error)?;
    file.write_all(body.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    debug!("Wrote {} bytes to {}", body.len(), destination.display());
    Ok(())
}

/// Writes the template for `selector` to `destination`.
pub fn emit(selector: Selector, destination: &Path) -> Result<(), EmitError> {
    let body = template_for(selector)?;
    debug!("Selected {} template", selector);
    write_template(body, destination)
}

/// Runs the whole pipeline: resolve the arguments, echo them, write the file.
pub fn run<I, T>(args: I) -> Result<Invocation, EmitError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = resolve_arguments(args)?;
    println!("{}", confirmation(&invocation));

    emit(invocation.selector, &invocation.destination)?;
    info!(
        "Generated {} source at {}",
        invocation.selector,
        invocation.destination.display()
    );
    Ok(invocation)
}
