use miette::Result;

use tscaffold_core::template::TemplateRegistry;

pub fn exec() -> Result<()> {
    let registry = TemplateRegistry::new()?;
    let catalog = registry.catalog();

    println!("Templates:");
    for tmpl in registry.templates() {
        println!(
            "  {:<12} {} ({})",
            tmpl.name(),
            tmpl.template.label,
            tmpl.template.hint
        );
        let options: Vec<String> = tmpl
            .options
            .iter()
            .map(|o| {
                if tmpl.recommended.contains(o) {
                    format!("{o}*")
                } else {
                    o.clone()
                }
            })
            .collect();
        println!("  {:<12} options: {}", "", options.join(", "));
    }

    println!();
    println!("Options (* = recommended):");
    for option in &catalog.options {
        println!("  {:<20} {}", option.name, option.hint);
    }

    println!();
    println!("Workflows (with githubActions):");
    for workflow in &catalog.workflows {
        println!("  {:<20} {}", workflow.name, workflow.hint);
    }

    Ok(())
}
