//! Init Service - the `olympus init` sequence.
//!
//! 1. Validate: the project path must exist. If not, stop with
//!    [`InitOutcome::PathNotFound`]; nothing else runs.
//! 2. Prepare cache: [`ConfigStore::create_project_cache`].
//! 3. Render: stage the init file into the cache, then apply the template
//!    to the project.
//!
//! Only step 1 is intercepted. Failures in steps 2 and 3 propagate to the
//! caller unchanged.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ConfigStore,
        ports::{Filesystem, TemplateSetup},
    },
    domain::{AppliedTemplate, TemplateId},
    error::OlympusResult,
};

/// How an init run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The project path does not exist; nothing was changed.
    PathNotFound { path: PathBuf },
    /// Cache prepared and template applied.
    Completed {
        project_cache: PathBuf,
        init_file: PathBuf,
        applied: AppliedTemplate,
    },
}

impl InitOutcome {
    /// User-facing message for the abort case.
    pub fn path_not_found_message(path: &Path) -> String {
        format!("path {} does not exist.", path.display())
    }
}

pub struct InitService<'a> {
    config: &'a ConfigStore,
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSetup>,
}

impl<'a> InitService<'a> {
    pub fn new(
        config: &'a ConfigStore,
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateSetup>,
    ) -> Self {
        Self {
            config,
            filesystem,
            templates,
        }
    }

    #[instrument(
        skip(self),
        fields(project = %project.display(), template = %template)
    )]
    pub fn init(&self, project: &Path, template: &TemplateId) -> OlympusResult<InitOutcome> {
        if !self.filesystem.exists(project) {
            info!("Project path does not exist, nothing to initialize");
            return Ok(InitOutcome::PathNotFound {
                path: project.to_path_buf(),
            });
        }

        let project_cache = self.config.create_project_cache(project)?;
        let init_file = self.templates.stage_init_file(&project_cache)?;
        let applied = self.templates.apply_template(project, template)?;

        info!(
            written = applied.written.len(),
            skipped = applied.skipped.len(),
            "Initialization complete"
        );

        Ok(InitOutcome::Completed {
            project_cache,
            init_file,
            applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::*};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockConfigCodec, MockFilesystem, MockTemplateSetup},
    };
    use crate::domain::ConfigPaths;
    use crate::error::OlympusError;

    fn template() -> TemplateId {
        TemplateId::new("basic").unwrap()
    }

    /// A store whose filesystem only expects the project cache creation.
    fn store_expecting_cache(project: &'static str, times: usize) -> ConfigStore {
        let cache = Path::new(project).join("olympus");
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir()
            .withf(move |path: &Path| path == cache)
            .times(times)
            .returning(|_| Ok(()));
        // The global config is never touched by init.
        fs.expect_overwrite().never();
        fs.expect_create_dir_all().never();
        ConfigStore::new(
            ConfigPaths::from_home("/home/athena"),
            Box::new(fs),
            Box::new(MockConfigCodec::new()),
        )
    }

    fn existing(project: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new(project)))
            .return_const(true);
        fs
    }

    #[test]
    fn missing_project_aborts_without_side_effects() {
        let store = store_expecting_cache("/tmp/missing", 0);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let mut templates = MockTemplateSetup::new();
        templates.expect_stage_init_file().never();
        templates.expect_apply_template().never();

        let outcome = InitService::new(&store, Box::new(fs), Box::new(templates))
            .init(Path::new("/tmp/missing"), &template())
            .unwrap();

        assert_eq!(
            outcome,
            InitOutcome::PathNotFound {
                path: PathBuf::from("/tmp/missing")
            }
        );
    }

    #[test]
    fn existing_project_gets_cache_then_template() {
        let store = store_expecting_cache("/tmp/demo", 1);
        let mut seq = Sequence::new();

        let mut templates = MockTemplateSetup::new();
        templates
            .expect_stage_init_file()
            .with(eq(Path::new("/tmp/demo/olympus")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|cache| Ok(cache.join("init.toml")));
        templates
            .expect_apply_template()
            .withf(|project: &Path, id: &TemplateId| {
                project == Path::new("/tmp/demo") && id.as_str() == "basic"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, id| {
                let mut applied = AppliedTemplate::new(id.clone());
                applied.written.push(PathBuf::from("/tmp/demo/README.md"));
                Ok(applied)
            });

        let outcome = InitService::new(&store, Box::new(existing("/tmp/demo")), Box::new(templates))
            .init(Path::new("/tmp/demo"), &template())
            .unwrap();

        match outcome {
            InitOutcome::Completed {
                project_cache,
                init_file,
                applied,
            } => {
                assert_eq!(project_cache, PathBuf::from("/tmp/demo/olympus"));
                assert_eq!(init_file, PathBuf::from("/tmp/demo/olympus/init.toml"));
                assert_eq!(applied.written.len(), 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn template_failure_propagates() {
        let store = store_expecting_cache("/tmp/demo", 1);

        let mut templates = MockTemplateSetup::new();
        templates
            .expect_stage_init_file()
            .returning(|cache| Ok(cache.join("init.toml")));
        templates.expect_apply_template().returning(|_, id| {
            Err(ApplicationError::TemplateNotFound {
                id: id.to_string(),
                available: vec![],
            }
            .into())
        });

        let err = InitService::new(&store, Box::new(existing("/tmp/demo")), Box::new(templates))
            .init(Path::new("/tmp/demo"), &template())
            .unwrap_err();

        assert!(matches!(
            err,
            OlympusError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn message_names_the_path() {
        assert_eq!(
            InitOutcome::path_not_found_message(Path::new("/tmp/missing")),
            "path /tmp/missing does not exist."
        );
    }
}
