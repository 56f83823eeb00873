//! Languages operation - list registered backends.

use sdkgen_codegen::language::Dispatcher;

use crate::reports::{LanguageLine, LanguagesReport};

pub fn languages(dispatcher: &Dispatcher) -> LanguagesReport {
    LanguagesReport {
        languages: dispatcher
            .languages()
            .map(|language| LanguageLine {
                name: language.as_str(),
                aliases: language.aliases().to_vec(),
            })
            .collect(),
    }
}
