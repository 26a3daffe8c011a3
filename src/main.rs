use hello_emitter::{run, EmitError};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(std::env::args_os()) {
        Ok(_) => ExitCode::SUCCESS,
        // usage errors exit 2, help and version requests exit 0
        Err(EmitError::InvalidArgument(e)) => e.exit(),
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
