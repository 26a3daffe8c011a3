use clap::ValueEnum;
use std::fmt;

/// The flavour of source file to emit.
///
/// Command-line names come from the `ValueEnum` derive (`c`, `cpp`), and
/// `Selector::value_variants()` lists every member.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    C,
    Cpp,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_selector_is_a_command_line_value() {
        for selector in Selector::value_variants() {
            let value = selector
                .to_possible_value()
                .expect("every selector is a possible value");
            assert_eq!(value.get_name(), selector.to_string());
        }
    }

    #[test]
    fn parses_case_sensitively() {
        assert_eq!(Selector::from_str("c", false), Ok(Selector::C));
        assert_eq!(Selector::from_str("cpp", false), Ok(Selector::Cpp));
        assert!(Selector::from_str("CPP", false).is_err());
        assert!(Selector::from_str("java", false).is_err());
    }

    #[test]
    fn display_uses_command_line_name() {
        assert_eq!(Selector::C.to_string(), "c");
        assert_eq!(Selector::Cpp.to_string(), "cpp");
    }
}
