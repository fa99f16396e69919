use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::controllers::session::{ExplorerSession, SessionError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::navigation::{NavigationError, NavigationSettings};
use crate::input::cli::args::{Cli, Command, RenderArgs, StoreArgs};
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::storage::parameter_store::{ParameterStore, ParameterStoreError};
use crate::storage::render_parameters::{RenderLimits, RenderParameters};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] ParameterStoreError),
    #[error("starting bounds rejected: {0}")]
    StartingBounds(#[from] NavigationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("refusing to store bounds: {0}")]
    StoredBounds(#[source] ViewportError),
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDirectory { path: PathBuf, source: io::Error },
}

pub fn run(cli: Cli) -> Result<(), RunError> {
    match cli.command {
        Command::Render(args) => render(args),
        Command::Store(args) => store(args),
    }
}

/// Flags win over the latest stored record, which wins over the defaults.
/// The result is clamped into the allowed ranges.
fn resolve_parameters(args: &RenderArgs) -> Result<RenderParameters, RunError> {
    let base = match &args.store {
        Some(path) => ParameterStore::open(path)?
            .latest()
            .map(|record| record.parameters)
            .unwrap_or_default(),
        None => RenderParameters::default(),
    };

    let requested = args.parameters.overlay(base);
    let clamped = RenderLimits::default().clamp(requested);

    if clamped.changed {
        warn!(
            requested.width,
            requested.height,
            requested.max_iter,
            width = clamped.parameters.width,
            height = clamped.parameters.height,
            max_iter = clamped.parameters.max_iter,
            "parameters clamped into allowed range"
        );
    }

    Ok(clamped.parameters)
}

fn render(args: RenderArgs) -> Result<(), RunError> {
    let parameters = resolve_parameters(&args)?;
    let presenter = PpmFilePresenter::new(args.colour_map);

    let mut session = ExplorerSession::new(presenter, parameters, NavigationSettings::default())?;
    if let Some(timeout_ms) = args.timeout_ms {
        session = session.with_timeout(Duration::from_millis(timeout_ms));
    }

    for command in args.navigation {
        // rejections are logged by the session; carry on from the last good viewport
        let _ = session.apply(command);
    }

    session.generate()?;

    create_parent_dir(&args.output)?;
    session.write(&args.output)?;

    Ok(())
}

fn store(args: StoreArgs) -> Result<(), RunError> {
    let parameters = args.parameters.overlay(RenderParameters::default());
    if let Some(bounds) = parameters.bounds {
        Viewport::try_from(bounds).map_err(RunError::StoredBounds)?;
    }

    let mut store = ParameterStore::open(&args.store)?;

    let id = store.insert(parameters)?;
    info!(id, path = %store.path().display(), "parameters stored");

    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<(), RunError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| RunError::OutputDirectory {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mandelbrot_explorer").chain(args.iter().copied()))
            .unwrap()
    }

    fn render_args(args: &[&str]) -> RenderArgs {
        let mut full = vec!["render"];
        full.extend_from_slice(args);

        match parse(&full).command {
            Command::Render(render) => render,
            Command::Store(_) => panic!("expected render"),
        }
    }

    #[test]
    fn defaults_without_store_or_flags() {
        let parameters = resolve_parameters(&render_args(&[])).unwrap();

        assert_eq!(parameters, RenderParameters::default());
    }

    #[test]
    fn flags_are_clamped() {
        let parameters =
            resolve_parameters(&render_args(&["--width", "10", "--max-iter", "9000"])).unwrap();

        assert_eq!(parameters.width, 400);
        assert_eq!(parameters.height, 800);
        assert_eq!(parameters.max_iter, 500);
    }

    #[test]
    fn latest_stored_record_is_used_under_flags() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("parameters.json");
        let store_path = store_path.to_str().unwrap();

        run(parse(&["store", "--store", store_path, "--width", "500"])).unwrap();
        run(parse(&[
            "store",
            "--store",
            store_path,
            "--width",
            "600",
            "--max-iter",
            "50",
        ]))
        .unwrap();

        let parameters =
            resolve_parameters(&render_args(&["--store", store_path, "--height", "700"]))
                .unwrap();

        assert_eq!(
            parameters,
            RenderParameters {
                width: 600,
                height: 700,
                max_iter: 50,
                bounds: None,
            }
        );
    }

    #[test]
    fn store_rejects_unordered_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("parameters.json");

        let result = run(parse(&[
            "store",
            "--store",
            store_path.to_str().unwrap(),
            "--bounds",
            "1,0,0,1",
        ]));

        assert!(matches!(result, Err(RunError::StoredBounds(_))));
        assert!(!store_path.exists());
    }

    #[test]
    fn render_writes_image_despite_rejected_command() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/out.ppm");

        run(parse(&[
            "render",
            "--width",
            "400",
            "--height",
            "400",
            "--max-iter",
            "10",
            "--nav",
            "zoom-in",
            "--nav",
            "bounds=1,0,0,1",
            "--output",
            output.to_str().unwrap(),
        ]))
        .unwrap();

        let bytes = fs::read(&output).unwrap();
        let header = b"P6\n400 400\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 400 * 400 * 3);
    }

    #[test]
    fn invalid_starting_bounds_fail_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.ppm");

        let result = run(parse(&[
            "render",
            "--bounds",
            "0,0,0,1",
            "--output",
            output.to_str().unwrap(),
        ]));

        assert!(matches!(result, Err(RunError::StartingBounds(_))));
        assert!(!output.exists());
    }
}
