use std::fs;
use std::path::PathBuf;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn demos_root() -> PathBuf {
    workspace_root().join("demos")
}

pub fn demo_dir(name: &str) -> PathBuf {
    demos_root().join(name)
}

pub fn script_path(name: &str) -> PathBuf {
    demo_dir(name).join("main.frame")
}

pub fn testcase_path(name: &str) -> PathBuf {
    demo_dir(name).join("testcase.json")
}

/// Names of the bundled demos, sorted.
pub fn demo_names() -> Vec<String> {
    let mut names = fs::read_dir(demos_root())
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|entry| entry.path().is_dir())
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_points_to_workspace() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }

    #[test]
    fn demos_root_points_to_demos_directory() {
        assert!(demos_root().is_dir());
    }

    #[test]
    fn demo_names_lists_every_demo_with_script_and_testcase() {
        let names = demo_names();
        assert!(names.contains(&"01-sequential".to_string()));
        for name in names {
            assert!(script_path(&name).is_file(), "{} has no main.frame", name);
            assert!(testcase_path(&name).is_file(), "{} has no testcase", name);
        }
    }
}
