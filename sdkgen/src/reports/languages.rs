//! Languages command report.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct LanguagesReport {
    pub languages: Vec<LanguageLine>,
}

#[derive(Debug)]
pub struct LanguageLine {
    pub name: &'static str,
    pub aliases: Vec<&'static str>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Languages");
        for language in &self.languages {
            if language.aliases.is_empty() {
                out.list_item(language.name);
            } else {
                out.list_item(&format!(
                    "{} (aliases: {})",
                    language.name,
                    language.aliases.join(", ")
                ));
            }
        }
    }
}
