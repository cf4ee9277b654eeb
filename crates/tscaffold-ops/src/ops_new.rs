//! Operation: create a new project from a template.

use std::path::{Path, PathBuf};

use tscaffold_core::config::PackageManager;
use tscaffold_core::template::ProjectTemplate;
use tscaffold_resolver::DependencyResolver;
use tscaffold_util::errors::ScaffoldError;
use tscaffold_util::process::CommandBuilder;
use tscaffold_util::progress;

use crate::ops_update::{update_created_project, UpdateOptions};

/// What currently occupies the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Missing,
    /// A directory with no entries besides `.git`.
    EmptyDir,
    NonEmptyDir,
    File,
}

/// How to deal with an occupied target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAction {
    /// Remove the file at the target path.
    DeleteFile,
    /// Remove the directory contents, keeping `.git`.
    ClearDir,
    /// Copy over the existing contents.
    Ignore,
}

/// Inspect the target path.
pub fn inspect_target(path: &Path) -> miette::Result<TargetState> {
    if !path.exists() {
        return Ok(TargetState::Missing);
    }
    if !path.is_dir() {
        return Ok(TargetState::File);
    }
    let empty = tscaffold_util::fs::is_empty_dir(path).map_err(ScaffoldError::Io)?;
    Ok(if empty {
        TargetState::EmptyDir
    } else {
        TargetState::NonEmptyDir
    })
}

/// Apply `action` to the target path.
pub fn prepare_target(path: &Path, action: TargetAction) -> miette::Result<()> {
    match action {
        TargetAction::DeleteFile => {
            std::fs::remove_file(path).map_err(ScaffoldError::Io)?;
            tracing::debug!("removed file {}", path.display());
        }
        TargetAction::ClearDir => {
            tscaffold_util::fs::clear_dir(path).map_err(ScaffoldError::Io)?;
        }
        TargetAction::Ignore => {}
    }
    Ok(())
}

/// Inputs for [`create_project`].
pub struct NewProjectOptions<'a> {
    pub project_name: &'a str,
    pub target_dir: &'a Path,
    pub templates_root: &'a Path,
    pub template: &'a ProjectTemplate,
    pub options: &'a [String],
    pub workflows: &'a [String],
    pub package_manager: PackageManager,
    pub install: bool,
    pub git_init: bool,
}

/// Result of a successful [`create_project`].
#[derive(Debug)]
pub struct CreatedProject {
    pub dir: PathBuf,
    pub installed: bool,
    pub git_initialized: bool,
}

/// Directory of a template's files under the templates root.
pub fn template_source_dir(templates_root: &Path, template: &ProjectTemplate) -> PathBuf {
    templates_root.join(&template.template.dir)
}

/// Copy the template into the target, configure it, and optionally install
/// dependencies and initialize a git repository.
///
/// The target must already be prepared (see [`prepare_target`]).
pub fn create_project(
    opts: &NewProjectOptions<'_>,
    resolver: &DependencyResolver<'_>,
) -> miette::Result<CreatedProject> {
    let source = template_source_dir(opts.templates_root, opts.template);
    if !source.is_dir() {
        return Err(ScaffoldError::Template {
            message: format!(
                "Template directory {} does not exist",
                source.display()
            ),
        }
        .into());
    }

    let sp = progress::spinner("Copying template files...");
    tscaffold_util::fs::copy_dir_all(&source, opts.target_dir).map_err(ScaffoldError::Io)?;
    sp.set_message("Configuring project...");
    let updated = update_created_project(
        &UpdateOptions {
            project_name: opts.project_name,
            target_dir: opts.target_dir,
            templates_root: opts.templates_root,
            template: opts.template,
            options: opts.options,
            workflows: opts.workflows,
            package_manager: opts.package_manager,
        },
        resolver,
    );
    sp.finish_and_clear();
    updated?;
    progress::status(
        "Created",
        &format!(
            "{} project '{}' at {}",
            opts.template.template.label,
            opts.project_name,
            opts.target_dir.display()
        ),
    );

    let installed = if opts.install {
        install_dependencies(opts.target_dir, opts.package_manager)?;
        true
    } else {
        false
    };

    let git_initialized = opts.git_init && git_init(opts.target_dir)?;

    Ok(CreatedProject {
        dir: opts.target_dir.to_path_buf(),
        installed,
        git_initialized,
    })
}

/// Run `<package manager> install` in `dir`.
pub fn install_dependencies(dir: &Path, package_manager: PackageManager) -> miette::Result<()> {
    progress::status("Installing", &format!("dependencies with {package_manager}"));
    CommandBuilder::new(package_manager.as_str())
        .arg("install")
        .cwd(dir)
        .run()?;
    Ok(())
}

/// Initialize a git repository in `dir` unless one exists.
///
/// Returns `false` if `dir` already had a `.git` directory.
pub fn git_init(dir: &Path) -> miette::Result<bool> {
    if dir.join(".git").exists() {
        tracing::debug!("{} is already a git repository", dir.display());
        return Ok(false);
    }
    let output = CommandBuilder::new("git").arg("init").cwd(dir).exec()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScaffoldError::Process {
            message: format!("`git init` failed: {}", stderr.trim()),
        }
        .into());
    }
    progress::status("Initialized", "git repository");
    Ok(true)
}
