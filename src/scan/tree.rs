//! Directory tree generation.

use crate::error::Result;
use crate::fs::FileSystem;
use crate::scan::{list_visible, IgnoreRules};
use std::path::Path;

/// Render the tree under `root` with box-drawing connectors.
///
/// The root itself is not printed; every line is one entry, directories before
/// files at each level.
pub fn render_tree(fs: &dyn FileSystem, root: &Path, rules: &IgnoreRules) -> Result<String> {
    let mut lines = Vec::new();
    walk_tree(fs, root, root, "", rules, &mut lines)?;
    Ok(lines.join("\n"))
}

fn walk_tree(
    fs: &dyn FileSystem,
    root_path: &Path,
    current_path: &Path,
    prefix: &str,
    rules: &IgnoreRules,
    lines: &mut Vec<String>,
) -> Result<()> {
    let entries = list_visible(fs, root_path, current_path, rules)?;

    let total_entries = entries.len();
    for (idx, entry) in entries.into_iter().enumerate() {
        let is_last = idx == total_entries - 1;
        let connector = if is_last { "└── " } else { "├── " };

        lines.push(format!("{}{}{}", prefix, connector, entry.name));

        if entry.is_dir {
            let extension = if is_last { "    " } else { "│   " };
            walk_tree(
                fs,
                root_path,
                &entry.path,
                &format!("{}{}", prefix, extension),
                rules,
                lines,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFs;
    use similar_asserts::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn rules_for(root: &Path) -> IgnoreRules {
        IgnoreRules::load(&LocalFs, root, ".gitignore", &[]).expect("rules")
    }

    #[test]
    fn test_tree_respects_ignore_rules() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join("src")).expect("mkdir src");
        fs::write(root.join("src/main.py"), "print('hello')").expect("write main");
        fs::write(root.join("src/test.pyc"), "compiled").expect("write pyc");
        fs::create_dir(root.join("__pycache__")).expect("mkdir cache");
        fs::write(root.join("__pycache__/cache.py"), "cache").expect("write cache");
        fs::write(root.join("README.md"), "# README").expect("write readme");
        fs::write(root.join(".gitignore"), "\n*.pyc\n__pycache__/\n").expect("write gitignore");

        let tree = render_tree(&LocalFs, root, &rules_for(root)).expect("tree");

        assert_eq!(tree.as_str(), "├── src\n│   └── main.py\n├── .gitignore\n└── README.md");
    }

    #[test]
    fn test_tree_sorts_directories_first_then_by_name() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("a.txt"), "a").expect("write");
        fs::write(root.join("z.txt"), "z").expect("write");
        fs::create_dir_all(root.join("b/inner")).expect("mkdir");
        fs::write(root.join("b/inner/deep.txt"), "d").expect("write");
        fs::write(root.join("b/file.txt"), "f").expect("write");
        fs::create_dir(root.join("y")).expect("mkdir");
        fs::write(root.join("y/last.txt"), "l").expect("write");

        let tree = render_tree(&LocalFs, root, &rules_for(root)).expect("tree");

        let expected = [
            "├── b",
            "│   ├── inner",
            "│   │   └── deep.txt",
            "│   └── file.txt",
            "├── y",
            "│   └── last.txt",
            "├── a.txt",
            "└── z.txt",
        ]
        .join("\n");
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_tree_last_visible_entry_gets_corner() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("keep.txt"), "k").expect("write");
        fs::write(root.join("zz.log"), "ignored").expect("write");
        fs::write(root.join(".gitignore"), "*.log\n").expect("write");

        let tree = render_tree(&LocalFs, root, &rules_for(root)).expect("tree");
        assert_eq!(tree.as_str(), "├── .gitignore\n└── keep.txt");
    }

    #[test]
    fn test_tree_hides_vcs_directory() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join(".git")).expect("mkdir .git");
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main").expect("write");
        fs::write(root.join("main.rs"), "fn main() {}").expect("write");

        let rules = IgnoreRules::builtin(root).expect("rules");
        let tree = render_tree(&LocalFs, root, &rules).expect("tree");
        assert_eq!(tree.as_str(), "└── main.rs");
    }

    #[test]
    fn test_empty_directory_renders_without_children() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir(root.join("empty")).expect("mkdir");

        let tree = render_tree(&LocalFs, root, &rules_for(root)).expect("tree");
        assert_eq!(tree.as_str(), "└── empty");
    }
}
