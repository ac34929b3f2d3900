//! Test data generators using the fake crate, plus proptest strategies.

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word, Words};
use proptest::prelude::*;

use crate::models::{GenerationResult, Tier, TieredDocumentation};

/// Generates plausible generation results with markdown in every tier.
///
/// # Example
/// ```ignore
/// let result = GenerationResultGenerator::new()
///     .with_repo_name("express")
///     .with_code_blocks(true)
///     .generate();
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationResultGenerator {
    repo_name: Option<String>,
    sections: usize,
    code_blocks: bool,
}

impl GenerationResultGenerator {
    pub fn new() -> Self {
        Self {
            repo_name: None,
            sections: 3,
            code_blocks: false,
        }
    }

    pub fn with_repo_name(mut self, name: impl Into<String>) -> Self {
        self.repo_name = Some(name.into());
        self
    }

    /// Number of `##` sections per tier.
    pub fn with_sections(mut self, sections: usize) -> Self {
        self.sections = sections;
        self
    }

    /// Append a fenced code block to each section.
    pub fn with_code_blocks(mut self, enabled: bool) -> Self {
        self.code_blocks = enabled;
        self
    }

    pub fn generate(&self) -> GenerationResult {
        let repo_name = self
            .repo_name
            .clone()
            .unwrap_or_else(|| Word().fake::<String>());

        GenerationResult {
            success: Some(true),
            documentation: TieredDocumentation {
                beginner: self.markdown(&repo_name, Tier::Beginner),
                intermediate: self.markdown(&repo_name, Tier::Intermediate),
                advanced: self.markdown(&repo_name, Tier::Advanced),
            },
            repo_name,
            metadata: None,
        }
    }

    fn markdown(&self, repo_name: &str, tier: Tier) -> String {
        let mut out = format!("# {} ({})\n\n", repo_name, tier.label());
        for _ in 0..self.sections {
            let heading: Vec<String> = Words(1..4).fake();
            out.push_str(&format!("## {}\n\n", heading.join(" ")));
            out.push_str(&Sentence(5..12).fake::<String>());
            out.push_str("\n\n");
            if self.code_blocks {
                let ident: String = Word().fake();
                out.push_str(&format!(
                    "```javascript\nconst {} = require('{}');\n```\n\n",
                    ident, repo_name
                ));
            }
        }
        out
    }
}

/// GitHub repository URLs accepted by the form validator.
pub fn valid_repo_url() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9_-]{1,20}",
        "[A-Za-z0-9_-]{1,20}",
        any::<bool>(),
    )
        .prop_map(|(owner, repo, slash)| {
            format!(
                "https://github.com/{}/{}{}",
                owner,
                repo,
                if slash { "/" } else { "" }
            )
        })
}
