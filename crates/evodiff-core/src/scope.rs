//! Analysis-scope descriptor generation.
//!
//! A scope descriptor tells a comparison engine which libraries and
//! which application artifact to load for one version. It is a small
//! generated text file living inside the version's build directory,
//! rewritten from scratch on every run. Not meant to be hand-edited.

use std::path::{Path, PathBuf};

use crate::domain::{Result, Version};

/// Platform model library expected inside the configuration directory.
pub const PRIMORDIAL_MODEL_JAR: &str = "primordial.jar.model";

/// Test framework library expected inside the configuration directory.
pub const JUNIT_JAR: &str = "junit-4.4.jar";

/// Class-hierarchy exclusions file expected inside the configuration
/// directory. Passed verbatim to engine construction, never parsed here.
pub const EXCLUSIONS_FILE: &str = "diff-SafeClassHierarchyExclusions.wala";

/// Render the four descriptor lines for one (version, artifact) combination.
///
/// Line format is `<kind>,<language>,<subkind>,<value>`, LF-terminated:
/// a standard-library baseline, the two shared libraries from the
/// configuration directory, and the version's own artifact jar.
pub fn render_scope_config(version: &Version, config_dir: &Path, artifact_file: &str) -> String {
    let mut out = String::new();
    out.push_str("Primordial,Java,stdlib,none\n");
    out.push_str(&format!(
        "Primordial,Java,jarFile,{}\n",
        config_dir.join(PRIMORDIAL_MODEL_JAR).display()
    ));
    out.push_str(&format!(
        "Primordial,Java,jarFile,{}\n",
        config_dir.join(JUNIT_JAR).display()
    ));
    out.push_str(&format!(
        "Application,Java,jarFile,{}\n",
        version.build_dir.join(artifact_file).display()
    ));
    out
}

/// Write the scope descriptor for `version` to `out_file` inside the
/// version's build directory, returning the path written.
///
/// Overwrites unconditionally; identical inputs produce byte-identical
/// files. No existence check is made for the referenced jars; a
/// missing shared library surfaces later, at engine construction.
pub fn write_scope_config(
    version: &Version,
    config_dir: &Path,
    artifact_file: &str,
    out_file: &str,
) -> Result<PathBuf> {
    let path = version.build_dir.join(out_file);
    let content = render_scope_config(version, config_dir, artifact_file);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_has_exactly_four_lines_in_fixed_order() {
        let version = Version::new("v1", "/builds/v1");
        let rendered = render_scope_config(&version, Path::new("/cfg"), "code.jar");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Primordial,Java,stdlib,none");
        assert_eq!(lines[1], "Primordial,Java,jarFile,/cfg/primordial.jar.model");
        assert_eq!(lines[2], "Primordial,Java,jarFile,/cfg/junit-4.4.jar");
        assert_eq!(lines[3], "Application,Java,jarFile,/builds/v1/code.jar");
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_points_at_requested_artifact() {
        let version = Version::new("v2", "/builds/v2");
        let rendered = render_scope_config(&version, Path::new("/cfg"), "tests.jar");
        assert!(rendered.contains("Application,Java,jarFile,/builds/v2/tests.jar"));
    }

    #[test]
    fn test_write_overwrites_and_is_byte_identical() {
        let dir = tempfile::tempdir().expect("tempdir");
        let version = Version::new("v1", dir.path());

        let first = write_scope_config(&version, Path::new("/cfg"), "code.jar", "wala-code.config")
            .expect("first write");
        let bytes_first = std::fs::read(&first).expect("read first");

        let second = write_scope_config(&version, Path::new("/cfg"), "code.jar", "wala-code.config")
            .expect("second write");
        assert_eq!(first, second);

        let bytes_second = std::fs::read(&second).expect("read second");
        assert_eq!(bytes_first, bytes_second);
    }

    #[test]
    fn test_write_fails_on_missing_build_dir() {
        let version = Version::new("ghost", "/nonexistent/evodiff/builds/ghost");
        let err = write_scope_config(&version, Path::new("/cfg"), "code.jar", "wala-code.config");
        assert!(err.is_err());
    }
}
