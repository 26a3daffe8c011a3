use crate::error::EmitError;
use crate::selector::Selector;

pub const C_TEMPLATE: &str = "
    #include <stdio.h>

    int main() {
        printf(\"Hello World from C\");
        return 0;
    }
    ";

pub const CPP_TEMPLATE: &str = "
    #include <iostream>

    int main() {
        std::cout << \"Hello World from CPP\" << std::endl;
        return 0;
    }
    ";

/// Returns the program body emitted for `selector`.
///
/// Every selector must map to a non-empty body; a blank one is reported as
/// [`EmitError::UnhandledSelector`] so that no empty file is ever written.
pub fn template_for(selector: Selector) -> Result<&'static str, EmitError> {
    let body = match selector {
        Selector::C => C_TEMPLATE,
        Selector::Cpp => CPP_TEMPLATE,
    };
    require_body(selector, body)
}

fn require_body(selector: Selector, body: &'static str) -> Result<&'static str, EmitError> {
    if body.trim().is_empty() {
        return Err(EmitError::UnhandledSelector(selector));
    }
    Ok(body)
}
