//! Generation orchestration: copy, patch, rename and substitute, in order.

use crate::config::Configuration;
use crate::constants::{
    CLIP_ENTITLEMENTS_VARIABLES, DESCRIPTOR_VARIABLES, FILES_TO_UPDATE, MAIN_ENTITLEMENTS_VARIABLES,
    PROJECT_DESCRIPTOR, TEMPLATE_CLIP_TARGET, TEMPLATE_MAIN_TARGET,
};
use crate::copier::copy_template;
use crate::error::{Error, Result};
use crate::ignore::ExclusionFilter;
use crate::patch::{
    descriptor_patches, entitlements_file, patch_descriptor, rename_all_entitlements, RenameOutcome,
};
use crate::prompt::Prompter;
use crate::renderer::{
    select_variables, unresolved_placeholders, update_file, variables_from_config, VariableSet,
};
use log::warn;
use std::path::{Path, PathBuf};

/// Summary of a finished generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub output_root: PathBuf,
    /// Output-relative files that received substitution.
    pub updated: Vec<String>,
    /// Output-relative files scheduled for substitution but absent.
    pub skipped: Vec<String>,
    pub renamed: Vec<RenameOutcome>,
}

/// Default output location: the project name inside the template root.
pub fn default_output_dir(template_root: &Path, config: &Configuration) -> PathBuf {
    template_root.join(&config.project.name)
}

/// Drives a single generation run.
pub struct Processor<'a> {
    prompt: &'a dyn Prompter,
    filter: &'a ExclusionFilter,
    config: &'a Configuration,
    variables: VariableSet,
    skip_overwrite_check: bool,
}

impl<'a> Processor<'a> {
    pub fn new(
        prompt: &'a dyn Prompter,
        filter: &'a ExclusionFilter,
        config: &'a Configuration,
        skip_overwrite_check: bool,
    ) -> Self {
        let variables = variables_from_config(config);
        Self { prompt, filter, config, variables, skip_overwrite_check }
    }

    /// Records the outcome of a per-file step. Missing files are warnings.
    fn track(&self, report: &mut GenerationReport, relative: &str, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => {
                report.updated.push(relative.to_string());
                Ok(())
            }
            Err(e @ Error::MissingTargetFile { .. }) => {
                warn!("Warning: {e}");
                report.skipped.push(relative.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn update(&self, report: &mut GenerationReport, relative: &str, keys: &[&str]) -> Result<()> {
        let variables = select_variables(&self.variables, keys);
        let outcome = update_file(&report.output_root, relative, &variables);
        self.track(report, relative, outcome)
    }

    /// Warns about `${...}` tokens left in the generated files.
    fn report_unresolved(&self, report: &GenerationReport, files: &[String]) -> Result<()> {
        for relative in files {
            let path = report.output_root.join(relative);
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            let leftovers = unresolved_placeholders(&content)?;
            if !leftovers.is_empty() {
                warn!("Found remaining placeholders in {}: {}", relative, leftovers.join(", "));
            }
        }
        Ok(())
    }

    /// Generates the project from `template_dir` into `output_dir`.
    ///
    /// # Flow
    /// 1. Copies the filtered template tree
    /// 2. Patches the project descriptor
    /// 3. Substitutes entitlement files under their template names
    /// 4. Renames entitlement files to the resolved target names
    /// 5. Substitutes the remaining files from the static file table
    pub fn generate(&self, template_dir: &Path, output_dir: &Path) -> Result<GenerationReport> {
        let output_root = copy_template(
            self.prompt,
            self.filter,
            template_dir,
            output_dir,
            self.skip_overwrite_check,
        )?;
        let mut report = GenerationReport { output_root, ..Default::default() };
        let targets = self.config.target_names();

        println!("\nGenerating white-label project...");

        let patches = descriptor_patches(select_variables(&self.variables, DESCRIPTOR_VARIABLES), &targets);
        let outcome = patch_descriptor(&report.output_root, PROJECT_DESCRIPTOR, &patches);
        self.track(&mut report, PROJECT_DESCRIPTOR, outcome)?;
        println!("  ✓ Updated {PROJECT_DESCRIPTOR}");

        let main_entitlements = entitlements_file(TEMPLATE_MAIN_TARGET);
        let clip_entitlements = entitlements_file(TEMPLATE_CLIP_TARGET);
        self.update(&mut report, &main_entitlements, MAIN_ENTITLEMENTS_VARIABLES)?;
        self.update(&mut report, &clip_entitlements, CLIP_ENTITLEMENTS_VARIABLES)?;
        println!("  ✓ Updated entitlements");

        report.renamed = rename_all_entitlements(&report.output_root, &targets)?;

        for (relative, keys) in FILES_TO_UPDATE {
            self.update(&mut report, relative, keys)?;
            println!("  ✓ Updated {relative}");
        }

        let mut scanned: Vec<String> = vec![
            PROJECT_DESCRIPTOR.to_string(),
            entitlements_file(&targets.main),
            entitlements_file(&targets.clip),
        ];
        scanned.extend(FILES_TO_UPDATE.iter().map(|(relative, _)| relative.to_string()));
        self.report_unresolved(&report, &scanned)?;

        Ok(report)
    }
}
