mod cli;
mod emitter;
mod error;
mod selector;
mod template;
mod test_helpers;

pub use cli::{confirmation, resolve_arguments, Args, Invocation};
pub use emitter::{emit, run, write_template};
pub use error::EmitError;
pub use selector::Selector;
pub use template::{template_for, CPP_TEMPLATE, C_TEMPLATE};
