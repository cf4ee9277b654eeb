use console::Style;
use miette::Result;
use std::path::Path;

use tscaffold_core::config::{GlobalConfig, PackageManager};
use tscaffold_core::options::{
    deselect, finalize_options, has_hook_conflict, missing_vitest, select, unknown_options,
    GITHOOKS, GITHUB_ACTIONS, HUSKY, REACT_TESTING_LIBRARY, VITEST,
};
use tscaffold_core::template::{ProjectTemplate, TemplateColor, TemplateRegistry};
use tscaffold_core::validate::{
    is_valid_package_name, project_name_from_path, resolve_target_dir, validate_package_name,
};
use tscaffold_ops::ops_new::{
    create_project, inspect_target, prepare_target, NewProjectOptions, TargetAction, TargetState,
};
use tscaffold_resolver::DependencyResolver;
use tscaffold_util::errors::ScaffoldError;
use tscaffold_util::progress;

use crate::cli::NewArgs;
use crate::prompt;

const DEFAULT_PROJECT_NAME: &str = "my-project";

fn cancelled() -> miette::Report {
    ScaffoldError::Generic {
        message: "Operation cancelled.".to_string(),
    }
    .into()
}

fn style_for(color: TemplateColor) -> Style {
    match color {
        TemplateColor::Green => Style::new().green(),
        TemplateColor::Cyan => Style::new().cyan(),
        TemplateColor::Yellow => Style::new().yellow(),
        TemplateColor::Magenta => Style::new().magenta(),
        TemplateColor::Blue => Style::new().blue(),
    }
}

pub fn exec(args: NewArgs) -> Result<()> {
    let config = GlobalConfig::load()?;
    let templates_root = config.templates_root()?;
    let registry = TemplateRegistry::new()?;
    let interactive = !args.yes && console::user_attended();
    let cwd = std::env::current_dir().map_err(ScaffoldError::Io)?;

    let arg_target = args
        .directory
        .as_deref()
        .map(|dir| resolve_target_dir(dir, &cwd))
        .transpose()?;

    let project_name = project_name(&args, arg_target.as_deref(), interactive)?;
    let target_dir = match arg_target {
        Some(dir) => dir,
        None if interactive => {
            let default = cwd.join(&project_name);
            let answer = prompt::input(
                "Where to create the project?",
                &default.display().to_string(),
                |value: &String| {
                    resolve_target_dir(value, &cwd)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                },
            )?;
            resolve_target_dir(&answer, &cwd)?
        }
        None => resolve_target_dir(&project_name, &cwd)?,
    };
    progress::status_info("Target", &target_dir.display().to_string());

    handle_existing_target(&target_dir, &cwd, &args, interactive)?;

    let template = pick_template(&registry, args.template.as_deref(), interactive)?;
    let options = pick_options(&registry, template, args.options.as_deref(), interactive)?;
    let workflows = pick_workflows(&registry, &options, args.workflows.as_deref(), interactive)?;

    let install = args.install
        || if interactive {
            prompt::confirm("Install dependencies?", config.install)?
        } else {
            config.install
        };
    let package_manager = match args.package_manager {
        Some(pm) => pm,
        None if interactive => {
            let default = PackageManager::ALL
                .iter()
                .position(|pm| *pm == config.package_manager)
                .unwrap_or(0);
            let idx = prompt::select("Package manager:", &PackageManager::ALL, default)?;
            PackageManager::ALL[idx]
        }
        None => config.package_manager,
    };
    let git_init = args.git || config.git_init;

    tracing::debug!(
        "creating '{project_name}' from template '{}' with options [{}] and workflows [{}]",
        template.name(),
        options.join(", "),
        workflows.join(", ")
    );

    let created = create_project(
        &NewProjectOptions {
            project_name: &project_name,
            target_dir: &target_dir,
            templates_root: &templates_root,
            template,
            options: &options,
            workflows: &workflows,
            package_manager,
            install,
            git_init,
        },
        &DependencyResolver::builtin(),
    )?;

    println!();
    println!("Done. Now run:");
    if created.dir != cwd {
        let shown = created.dir.strip_prefix(&cwd).unwrap_or(created.dir.as_path());
        println!("  cd {}", shown.display());
    }
    if !created.installed {
        println!("  {package_manager} install");
    }
    let first_script = if template.project_options.iter().any(|o| o == "lib") {
        "build"
    } else {
        "dev"
    };
    println!("  {package_manager} run {first_script}");

    Ok(())
}

fn project_name(args: &NewArgs, target: Option<&Path>, interactive: bool) -> Result<String> {
    if let Some(name) = &args.name {
        validate_package_name(name)?;
        return Ok(name.clone());
    }

    let suggested = target.and_then(project_name_from_path);
    if interactive {
        let default = suggested
            .filter(|name| {
                let valid = is_valid_package_name(name);
                if !valid {
                    progress::status_warn("Warning", &format!("'{name}' is not a valid package name"));
                }
                valid
            })
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
        return prompt::input("Project name:", &default, |value: &String| {
            if is_valid_package_name(value) {
                Ok(())
            } else {
                Err("Please enter a valid package name (see https://docs.npmjs.com/cli/v11/configuring-npm/package-json#name)".to_string())
            }
        });
    }

    match suggested {
        Some(name) => {
            validate_package_name(&name)?;
            Ok(name)
        }
        None => Ok(DEFAULT_PROJECT_NAME.to_string()),
    }
}

fn handle_existing_target(
    target: &Path,
    cwd: &Path,
    args: &NewArgs,
    interactive: bool,
) -> Result<()> {
    let shown = if target == cwd {
        "Current directory".to_string()
    } else {
        format!("Target \"{}\"", target.display())
    };

    match inspect_target(target)? {
        TargetState::Missing | TargetState::EmptyDir => Ok(()),
        TargetState::File => {
            if !interactive {
                if !args.overwrite {
                    return Err(ScaffoldError::InvalidTarget {
                        message: format!(
                            "{} is a file; pass --overwrite to delete it",
                            target.display()
                        ),
                    }
                    .into());
                }
                return prepare_target(target, TargetAction::DeleteFile);
            }
            let proceed = args.overwrite || {
                let choices = ["Cancel operation", "Delete the file and continue"];
                let msg = format!("{shown} is not a directory. How to proceed?");
                prompt::select(&msg, &choices, 0)? == 1
            };
            if proceed
                && prompt::confirm(
                    &format!("Are you sure you want to delete file \"{}\"?", target.display()),
                    false,
                )?
            {
                prepare_target(target, TargetAction::DeleteFile)
            } else {
                Err(cancelled())
            }
        }
        TargetState::NonEmptyDir => {
            if !interactive {
                if !args.overwrite {
                    return Err(ScaffoldError::InvalidTarget {
                        message: format!(
                            "{} is not empty; pass --overwrite to remove its contents",
                            target.display()
                        ),
                    }
                    .into());
                }
                return prepare_target(target, TargetAction::ClearDir);
            }
            let action = if args.overwrite {
                TargetAction::ClearDir
            } else {
                let choices = [
                    "Cancel operation",
                    "Remove existing files and continue",
                    "Ignore files and continue",
                ];
                let msg = format!("{shown} is not empty. How to proceed?");
                match prompt::select(&msg, &choices, 0)? {
                    1 => TargetAction::ClearDir,
                    2 => TargetAction::Ignore,
                    _ => return Err(cancelled()),
                }
            };
            if action == TargetAction::ClearDir
                && !prompt::confirm(
                    &format!(
                        "Are you sure you want to delete all files in \"{}\"?",
                        target.display()
                    ),
                    false,
                )?
            {
                return Err(cancelled());
            }
            prepare_target(target, action)
        }
    }
}

fn pick_template<'r>(
    registry: &'r TemplateRegistry,
    name: Option<&str>,
    interactive: bool,
) -> Result<&'r ProjectTemplate> {
    if let Some(name) = name {
        let tmpl = registry.get(name).ok_or_else(|| ScaffoldError::Template {
            message: format!(
                "Unknown template '{name}'. Available: {}",
                registry.names().join(", ")
            ),
        })?;
        progress::status_info("Template", &tmpl.template.label);
        return Ok(tmpl);
    }

    let templates = registry.templates();
    let idx = if interactive {
        let labels: Vec<String> = templates
            .iter()
            .map(|t| {
                format!(
                    "{} - {}",
                    style_for(t.template.color).apply_to(&t.template.label),
                    t.template.hint
                )
            })
            .collect();
        prompt::select("Select template:", &labels, 0)?
    } else {
        0
    };
    let tmpl = templates.get(idx).copied().ok_or_else(|| ScaffoldError::Template {
        message: "No templates available".to_string(),
    })?;
    progress::status_info("Template", &tmpl.template.label);
    Ok(tmpl)
}

fn pick_options(
    registry: &TemplateRegistry,
    template: &ProjectTemplate,
    given: Option<&[String]>,
    interactive: bool,
) -> Result<Vec<String>> {
    let mut options: Vec<String> = match given {
        Some(given) => {
            let given: Vec<String> = given
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
            let unknown = unknown_options(&given, template);
            if !unknown.is_empty() {
                return Err(ScaffoldError::Config {
                    message: format!(
                        "Unknown option(s) for template '{}': {}. Available: {}",
                        template.name(),
                        unknown.join(", "),
                        template.options.join(", ")
                    ),
                }
                .into());
            }
            given
        }
        None if interactive => {
            let choices = registry.choices(template);
            let style = style_for(template.template.color);
            let labels: Vec<String> = choices
                .iter()
                .map(|o| {
                    let label = if template.recommended.contains(&o.name) {
                        format!("{} (recommended)", o.label)
                    } else {
                        o.label.clone()
                    };
                    format!("{} - {}", style.apply_to(label), o.hint)
                })
                .collect();
            let defaults: Vec<bool> = choices
                .iter()
                .map(|o| template.recommended.contains(&o.name))
                .collect();
            prompt::multi_select("Select additional tools:", &labels, &defaults)?
                .into_iter()
                .map(|i| choices[i].name.clone())
                .collect()
        }
        None => template.recommended.clone(),
    };

    if has_hook_conflict(&options) {
        if !interactive {
            return Err(ScaffoldError::Config {
                message: "Husky and native git-hooks cannot both be selected".to_string(),
            }
            .into());
        }
        let choices = ["Native git-hooks", "Husky"];
        let keep_husky = prompt::select(
            "It is not possible to select both Husky and native git-hooks. Select which one to use:",
            &choices,
            0,
        )? == 1;
        deselect(&mut options, if keep_husky { GITHOOKS } else { HUSKY });
    }

    if missing_vitest(&options) {
        let add = !interactive
            || prompt::confirm(
                "React Testing Library requires Vitest. Add Vitest?",
                true,
            )?;
        if add {
            progress::status_info("Adding", "vitest (required by React Testing Library)");
            select(&mut options, VITEST);
        } else {
            deselect(&mut options, REACT_TESTING_LIBRARY);
        }
    }

    Ok(finalize_options(&options, template, registry.catalog()))
}

fn pick_workflows(
    registry: &TemplateRegistry,
    options: &[String],
    given: Option<&[String]>,
    interactive: bool,
) -> Result<Vec<String>> {
    let catalog = registry.catalog();
    if !options.iter().any(|o| o == GITHUB_ACTIONS) {
        if given.is_some_and(|w| !w.is_empty()) {
            progress::status_warn("Ignoring", "--workflows without the githubActions option");
        }
        return Ok(Vec::new());
    }

    match given {
        Some(given) => {
            let mut workflows = Vec::new();
            for name in given.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
                if catalog.workflow(name).is_none() {
                    let known: Vec<&str> =
                        catalog.workflows.iter().map(|w| w.name.as_str()).collect();
                    return Err(ScaffoldError::Config {
                        message: format!(
                            "Unknown workflow '{name}'. Available: {}",
                            known.join(", ")
                        ),
                    }
                    .into());
                }
                if !workflows.iter().any(|w| w == name) {
                    workflows.push(name.to_string());
                }
            }
            Ok(workflows)
        }
        None if interactive => {
            let labels: Vec<String> = catalog
                .workflows
                .iter()
                .map(|w| format!("{} - {}", w.label, w.hint))
                .collect();
            let defaults = vec![false; labels.len()];
            Ok(
                prompt::multi_select("Select GitHub Actions workflows:", &labels, &defaults)?
                    .into_iter()
                    .map(|i| catalog.workflows[i].name.clone())
                    .collect(),
            )
        }
        None => Ok(Vec::new()),
    }
}
