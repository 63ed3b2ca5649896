//! Checks that every source file has a unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no logic of their own
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Relative paths of every directory and `.rs` file below `root`
    fn layout(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    pending.push(path);
                    paths.insert(relative);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    paths.insert(relative);
                }
            }
        }
        Ok(paths)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = layout(Path::new(SRC_DIR)).expect("src directory is readable");
        let unit = layout(Path::new(UNIT_DIR)).expect("unit test directory is readable");

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_organizational(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = layout(Path::new(SRC_DIR)).expect("src directory is readable");
        let unit = layout(Path::new(UNIT_DIR)).expect("unit test directory is readable");

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_root = Path::new("tests");
        let files = layout(tests_root).expect("tests directory is readable");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs"))
            // Harness roots and module lists only declare modules
            .filter(|path| !path.ends_with("main.rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(tests_root.join(path.as_str()))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
