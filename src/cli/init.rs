//! Init flow - collect answers, resolve the project directory, write tsconfig.json

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use super::prompts::{collect_answers, Prompter};
use crate::error::InitError;
use crate::tsconfig::{generate, AnswerRecord, TsConfig, CURRENT_DIR_NAME};

/// Name of the file written into the project directory
pub const TSCONFIG_FILE_NAME: &str = "tsconfig.json";

/// How an init run ended
#[derive(Debug)]
pub enum InitOutcome {
    /// The file was written
    Written {
        answers: AnswerRecord,
        config: TsConfig,
        project_dir: PathBuf,
        path: PathBuf,
    },
    /// The user cancelled; nothing was touched
    Cancelled,
}

/// Resolve the directory a project name refers to.
///
/// `"."` is the working directory itself; anything else is joined onto it.
/// Root and drive prefixes are dropped so an absolute name still lands under `cwd`.
pub fn resolve_project_dir(cwd: &Path, project_name: &str) -> PathBuf {
    if project_name == CURRENT_DIR_NAME {
        return cwd.to_path_buf();
    }

    let relative: PathBuf = Path::new(project_name)
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect();
    cwd.join(relative)
}

/// Create `project_dir` (and parents) and write the document into it
///
/// Returns the path of the written `tsconfig.json`.
pub fn write_tsconfig(project_dir: &Path, config: &TsConfig) -> Result<PathBuf, InitError> {
    fs::create_dir_all(project_dir).map_err(|source| InitError::CreateDir {
        path: project_dir.to_path_buf(),
        source,
    })?;

    let json = config.to_json_pretty()?;
    let path = project_dir.join(TSCONFIG_FILE_NAME);
    fs::write(&path, json).map_err(|source| InitError::WriteFile {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Run the whole init flow against `cwd`.
///
/// Cancellation is reported as [`InitOutcome::Cancelled`], never as an error,
/// and happens before any filesystem access.
pub fn run_init<P: Prompter + ?Sized>(
    prompter: &mut P,
    cwd: &Path,
) -> Result<InitOutcome, InitError> {
    let answers = match collect_answers(prompter) {
        Ok(answers) => answers,
        Err(InitError::Cancelled) => {
            debug!("prompt sequence cancelled");
            return Ok(InitOutcome::Cancelled);
        }
        Err(e) => return Err(e),
    };

    let project_dir = resolve_project_dir(cwd, &answers.project_name);
    debug!(dir = %project_dir.display(), "resolved project directory");

    let config = generate(&answers);
    let path = write_tsconfig(&project_dir, &config)?;
    info!(path = %path.display(), "wrote tsconfig");

    Ok(InitOutcome::Written {
        answers,
        config,
        project_dir,
        path,
    })
}
