//! Templates compiled into the binary.
//!
//! Each template is a flat list of `(relative path, content)` entries.
//! Content is rendered through [`RenderContext`] before it is written.
//! Files that already exist in the project are never touched.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use olympus_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateSetup},
    },
    domain::{AppliedTemplate, TemplateId, TemplateSummary},
    error::OlympusResult,
};

use super::render::RenderContext;

/// Name of the metadata file staged in a project cache.
pub const INIT_FILE_NAME: &str = "init.toml";

/// Used when the project path has no final component, e.g. `/`.
const FALLBACK_PROJECT_NAME: &str = "project";

struct BuiltinTemplate {
    id: &'static str,
    description: &'static str,
    files: &'static [(&'static str, &'static str)],
}

const BASIC: BuiltinTemplate = BuiltinTemplate {
    id: "basic",
    description: "Minimal project: README, .gitignore and .editorconfig",
    files: &[
        ("README.md", "# {{PROJECT_NAME}}\n\nScaffolded with Olympus.\n"),
        (".gitignore", "node_modules/\ndist/\n.env\n"),
        (
            ".editorconfig",
            "root = true\n\n[*]\nindent_style = space\nindent_size = 2\nend_of_line = lf\ninsert_final_newline = true\n",
        ),
    ],
};

const LIBRARY: BuiltinTemplate = BuiltinTemplate {
    id: "library",
    description: "Reusable package with an entry module and a license",
    files: &[
        ("README.md", "# {{PROJECT_NAME}}\n\n```js\nconst {{PROJECT_NAME_SNAKE}} = require('{{PROJECT_NAME_KEBAB}}');\n```\n"),
        (
            "package.json",
            "{\n  \"name\": \"{{PROJECT_NAME_KEBAB}}\",\n  \"version\": \"0.1.0\",\n  \"main\": \"src/index.js\",\n  \"license\": \"MIT\"\n}\n",
        ),
        ("src/index.js", "module.exports = {};\n"),
        (
            "LICENSE",
            "MIT License\n\nCopyright (c) {{YEAR}} {{PROJECT_NAME}} contributors\n",
        ),
        (".gitignore", "node_modules/\ndist/\n"),
    ],
};

const SERVICE: BuiltinTemplate = BuiltinTemplate {
    id: "service",
    description: "HTTP service with a start script and a Dockerfile",
    files: &[
        ("README.md", "# {{PROJECT_NAME}}\n\nRun with `npm start`.\n"),
        (
            "package.json",
            "{\n  \"name\": \"{{PROJECT_NAME_KEBAB}}\",\n  \"version\": \"0.1.0\",\n  \"private\": true,\n  \"scripts\": {\n    \"start\": \"node src/server.js\"\n  }\n}\n",
        ),
        (
            "src/server.js",
            "const http = require('http');\n\nconst port = process.env.PORT || 3000;\n\nhttp\n  .createServer((_req, res) => res.end('{{PROJECT_NAME}}\\n'))\n  .listen(port);\n",
        ),
        (
            "Dockerfile",
            "FROM node:20-alpine\nWORKDIR /app\nCOPY . .\nCMD [\"node\", \"src/server.js\"]\n",
        ),
        (".gitignore", "node_modules/\n.env\n"),
    ],
};

const TEMPLATES: &[BuiltinTemplate] = &[BASIC, LIBRARY, SERVICE];

/// Contents of `init.toml`.
#[derive(Debug, Serialize)]
struct InitMetadata {
    scaffold_id: Uuid,
    created_at: DateTime<Utc>,
    generator: String,
}

/// [`TemplateSetup`] over the templates shipped with Olympus.
pub struct BuiltinTemplates {
    filesystem: Box<dyn Filesystem>,
}

impl BuiltinTemplates {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    fn find(id: &TemplateId) -> OlympusResult<&'static BuiltinTemplate> {
        TEMPLATES
            .iter()
            .find(|t| t.id == id.as_str())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    id: id.to_string(),
                    available: TEMPLATES.iter().map(|t| t.id.to_string()).collect(),
                }
                .into()
            })
    }

    fn write_new(&self, target: &Path, content: &str) -> OlympusResult<()> {
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.overwrite(target, content)
    }
}

impl TemplateSetup for BuiltinTemplates {
    #[instrument(skip(self), fields(cache = %project_cache.display()))]
    fn stage_init_file(&self, project_cache: &Path) -> OlympusResult<PathBuf> {
        let metadata = InitMetadata {
            scaffold_id: Uuid::new_v4(),
            created_at: Utc::now(),
            generator: format!("olympus {}", olympus_core::VERSION),
        };
        let text = toml::to_string_pretty(&metadata).map_err(|e| ApplicationError::Serialization {
            format: "toml",
            reason: e.to_string(),
        })?;

        let init_file = project_cache.join(INIT_FILE_NAME);
        self.filesystem.overwrite(&init_file, &text)?;

        debug!(path = %init_file.display(), scaffold_id = %metadata.scaffold_id, "Staged init file");
        Ok(init_file)
    }

    #[instrument(skip(self), fields(project = %project.display(), template = %template))]
    fn apply_template(
        &self,
        project: &Path,
        template: &TemplateId,
    ) -> OlympusResult<AppliedTemplate> {
        let builtin = Self::find(template)?;

        let project_name = project
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string());
        let context = RenderContext::new(project_name);

        let mut applied = AppliedTemplate::new(template.clone());
        for (relative, content) in builtin.files {
            let target = project.join(relative);
            if self.filesystem.exists(&target) {
                debug!(path = %target.display(), "File exists, skipping");
                applied.skipped.push(target);
                continue;
            }

            self.write_new(&target, &context.render(content))?;
            applied.written.push(target);
        }

        info!(
            written = applied.written.len(),
            skipped = applied.skipped.len(),
            "Template applied"
        );
        Ok(applied)
    }

    fn available(&self) -> Vec<TemplateSummary> {
        TEMPLATES
            .iter()
            .filter_map(|t| {
                TemplateId::new(t.id).ok().map(|id| TemplateSummary {
                    id,
                    description: t.description.to_string(),
                })
            })
            .collect()
    }
}
