//! Keeps the unit test mirror aligned with the src tree

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    fn collect_rust_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("path outside base directory"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative);
                    paths.extend(collect_rust_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }

    fn src_paths() -> HashSet<String> {
        let src_dir = Path::new("src");
        collect_rust_paths(src_dir, src_dir).unwrap_or_else(|error| {
            assert!(src_dir.exists(), "Failed to read src directory: {error}");
            HashSet::new()
        })
    }

    fn unit_paths() -> HashSet<String> {
        let tests_dir = Path::new("tests/unit");
        if tests_dir.exists() {
            collect_rust_paths(tests_dir, tests_dir).unwrap_or_default()
        } else {
            HashSet::new()
        }
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let units = unit_paths();
        let missing: Vec<String> = src_paths()
            .into_iter()
            .filter(|path| {
                path != "main.rs" && path != "lib.rs" && !path.ends_with("mod.rs")
            })
            .filter(|path| !units.contains(path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files missing unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = src_paths();
        let orphaned: Vec<String> = unit_paths()
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs"))
            .filter(|path| !sources.contains(path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files with no corresponding src file:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}
