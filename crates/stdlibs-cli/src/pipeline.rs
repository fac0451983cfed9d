//! Regeneration pipeline: fetch → migrate → parse → scan → write.
//!
//! Each release is handled to completion before the next one starts:
//! 1. Download and unpack the archive unless the cache already holds it
//! 2. Migrate 2.x build scripts with `lib2to3` (first extraction only)
//! 3. Parse the build script and extract `Extension` declarations
//! 4. Scan `Lib/`, the C sources and the inittab tables
//! 5. Write `py<XY>.py` and report `<version> done.`
//!
//! After the last release the aggregate `py2.py`, `py3.py` and `py.py`
//! tables are written. The first failure aborts the run; tables already
//! written stay on disk.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use stdlibs_config::StdlibsConfig;
use stdlibs_core::{Aggregates, ModuleNames, Release, TableTemplate, render_table, write_table};
use stdlibs_fetch::{CommandRunner, ensure_release, prepare_build_script};
use stdlibs_parser::{extract_extension_names, try_parse};
use stdlibs_scan::collect_source_names;

const PY2_TABLE: &str = "py2.py";
const PY3_TABLE: &str = "py3.py";
const COMBINED_TABLE: &str = "py.py";

pub struct Generator<'a> {
    config: &'a StdlibsConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a StdlibsConfig, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Regenerate the table for one release and return its names.
    pub fn regen(&self, release: &Release, out: &mut dyn Write) -> anyhow::Result<ModuleNames> {
        let tools = &self.config.tools;
        let version = release.version;

        let fetched = ensure_release(release, &self.config.paths.cache_dir, tools, self.runner)
            .with_context(|| format!("failed to fetch Python {version}"))?;
        let script_path = prepare_build_script(release, &fetched, &tools.python, self.runner)
            .with_context(|| format!("failed to prepare build script for Python {version}"))?;
        let script = try_parse(&script_path, None)
            .with_context(|| format!("failed to parse {}", script_path.display()))?;

        let mut names: ModuleNames = extract_extension_names(&script).into_iter().collect();
        let scanned = collect_source_names(&fetched.root, version)
            .with_context(|| format!("failed to scan {}", fetched.root.display()))?;
        names.union_with(&scanned);

        self.write(&release.table_file_name(), &names)?;
        writeln!(out, "{version} done.")?;
        Ok(names)
    }

    /// Regenerate every release in order, then the aggregate tables.
    pub fn regen_all(
        &self,
        releases: &[Release],
        out: &mut dyn Write,
    ) -> anyhow::Result<Aggregates> {
        let mut aggregates = Aggregates::default();
        for release in releases {
            let names = self.regen(release, out)?;
            aggregates.absorb(release.version, &names)?;
        }

        self.write(PY2_TABLE, &aggregates.py2)?;
        self.write(PY3_TABLE, &aggregates.py3)?;
        self.write(COMBINED_TABLE, &aggregates.combined())?;
        writeln!(out, "done")?;
        Ok(aggregates)
    }

    fn write(&self, file_name: &str, names: &ModuleNames) -> anyhow::Result<PathBuf> {
        let template = TableTemplate {
            header: &self.config.output.header,
            generator: &self.config.output.generator,
        };
        let contents = render_table(template, names);
        let path = write_table(&self.config.paths.output_dir, file_name, &contents)
            .with_context(|| format!("failed to write {file_name}"))?;
        tracing::info!(path = %path.display(), count = names.len(), "wrote table");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use stdlibs_core::RELEASES;
    use stdlibs_fetch::{CommandSpec, FetchError};

    use super::*;

    /// Every test tree is pre-extracted, so nothing may be spawned.
    struct NoCommands;

    impl CommandRunner for NoCommands {
        fn run(&self, command: &CommandSpec) -> Result<(), FetchError> {
            panic!("unexpected command: {}", command.display());
        }
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn release(label: &str) -> Release {
        *RELEASES.iter().find(|r| r.version.to_string() == label).unwrap()
    }

    fn test_config(tmp: &Path) -> StdlibsConfig {
        let mut config = StdlibsConfig::default();
        config.paths.cache_dir = tmp.join("cache");
        config.paths.output_dir = tmp.join("out");
        config
    }

    /// A cached 3.8 tree and a cached, already migrated 2.7 tree.
    fn cached_trees(cache: &Path) {
        let py38 = cache.join(release("3.8").cache_dir_name());
        write(
            &py38.join("setup.py"),
            "exts = []\nexts.append(Extension('_socket', ['socketmodule.c']))\n\
             if (n := len(exts)) > 0:\n    print(f'{n} extensions')\n",
        );
        write(&py38.join("Lib/os.py"), "");
        write(&py38.join("Lib/asyncio/__init__.py"), "");

        let py27 = cache.join(release("2.7").cache_dir_name());
        write(&py27.join("setup.py"), "print 'unmigrated'\n");
        write(
            &py27.join("fixed/setup.py"),
            "exts.append(Extension('strop', ['stropmodule.c']))\nCARBON_EXTS = ['_Qt']\n",
        );
        write(&py27.join("Lib/os.py"), "");
        write(&py27.join("Lib/lib-tk/Tkinter.py"), "");
    }

    #[test]
    fn single_release_combines_declared_and_scanned_names() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());
        cached_trees(&config.paths.cache_dir);
        let mut out = Vec::new();

        let names = Generator::new(&config, &NoCommands)
            .regen(&release("3.8"), &mut out)
            .unwrap();

        assert_eq!(
            names.iter().collect::<Vec<_>>(),
            vec![
                "_frozen_importlib",
                "_frozen_importlib_external",
                "_socket",
                "asyncio",
                "os"
            ]
        );
        assert_eq!(String::from_utf8(out).unwrap(), "3.8 done.\n");
        let table = fs::read_to_string(config.paths.output_dir.join("py38.py")).unwrap();
        assert!(table.starts_with("# Copyright 2021 The stdlibs Authors\n"));
        assert!(table.contains("# Generated by stdlibs-gen\n"));
        assert!(table.contains("        \"_socket\",\n"));
    }

    #[test]
    fn full_run_writes_aggregates() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());
        cached_trees(&config.paths.cache_dir);
        let mut out = Vec::new();

        let aggregates = Generator::new(&config, &NoCommands)
            .regen_all(&[release("2.7"), release("3.8")], &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2.7 done.\n3.8 done.\ndone\n"
        );
        assert_eq!(
            aggregates.py2.iter().collect::<Vec<_>>(),
            vec!["Tkinter", "_Qt", "os", "strop"]
        );
        assert!(aggregates.py3.contains("_socket"));
        assert!(!aggregates.py3.contains("strop"));

        let output = &config.paths.output_dir;
        for file in ["py27.py", "py38.py", "py2.py", "py3.py", "py.py"] {
            assert!(output.join(file).is_file(), "{file} missing");
        }
        let combined = fs::read_to_string(output.join("py.py")).unwrap();
        assert_eq!(
            combined,
            render_table(
                TableTemplate {
                    header: &config.output.header,
                    generator: &config.output.generator,
                },
                &aggregates.combined()
            )
        );
        assert!(combined.contains("\"strop\"") && combined.contains("\"_socket\""));
    }

    #[test]
    fn parse_failure_aborts_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());
        let root = config.paths.cache_dir.join(release("3.8").cache_dir_name());
        write(&root.join("setup.py"), "def broken(:\n");
        let mut out = Vec::new();

        let error = Generator::new(&config, &NoCommands)
            .regen_all(&[release("3.8")], &mut out)
            .unwrap_err();

        assert!(format!("{error:#}").contains("failed to parse"), "{error:#}");
        assert!(out.is_empty());
        assert!(!config.paths.output_dir.join("py38.py").exists());
    }
}
