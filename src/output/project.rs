use crate::naming::prefix_for;
use crate::project::{GeneratedProject, ProjectStatus};

use super::format::to_pretty_json;

pub(crate) fn print_project(project: &GeneratedProject) {
    match project.status {
        ProjectStatus::Created => {
            println!("Project name: {}", project.name);
            println!("Directory created: {}", project.path.display());
        }
        ProjectStatus::DryRun => {
            println!("Project name: {}", project.name);
            println!("Would create: {}", project.path.display());
        }
        ProjectStatus::AlreadyExists => {
            eprintln!("Warning: directory already exists: {}", project.path.display());
            eprintln!("Project name already used: {}", project.name);
        }
    }
}

pub(crate) fn output_project_json(project: &GeneratedProject) -> String {
    let value = serde_json::json!({
        "index": project.index,
        "prefix": project.prefix,
        "name": project.name,
        "path": project.path.to_string_lossy(),
        "status": project.status.as_str(),
    });
    to_pretty_json(&value, "{}")
}

pub(crate) fn print_prefixes(indices: &[u64]) {
    for &index in indices {
        println!("{index}\t{}", prefix_for(index));
    }
}

pub(crate) fn output_prefixes_json(indices: &[u64]) -> String {
    let output: Vec<serde_json::Value> = indices
        .iter()
        .map(|&index| {
            serde_json::json!({
                "index": index,
                "prefix": prefix_for(index),
            })
        })
        .collect();
    to_pretty_json(&serde_json::Value::Array(output), "[]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn project_json_fields() {
        let project = GeneratedProject {
            index: 1,
            prefix: "beta".to_string(),
            name: "beta-foo-bar".to_string(),
            path: PathBuf::from("/tmp/proj/beta-foo-bar"),
            status: ProjectStatus::Created,
        };
        let json: serde_json::Value = serde_json::from_str(&output_project_json(&project)).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["prefix"], "beta");
        assert_eq!(json["name"], "beta-foo-bar");
        assert_eq!(json["path"], "/tmp/proj/beta-foo-bar");
        assert_eq!(json["status"], "created");
    }

    #[test]
    fn prefixes_json_keeps_input_order() {
        let json: serde_json::Value = serde_json::from_str(&output_prefixes_json(&[24, 0])).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["prefix"], "alpha-alpha");
        assert_eq!(arr[1]["index"], 0);
        assert_eq!(arr[1]["prefix"], "alpha");
    }
}
