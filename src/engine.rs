//! Container engine invoked through its command line

mod listing;

pub use listing::{parse_listing, parse_listing_bytes, ContainerRecord};

use crate::command_ext::command_extensions::*;
use crate::error::{EngineError, ProbeError};
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Docker,
    Podman,
}

impl TryFrom<&str> for EngineKind {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "docker" => Ok(Self::Docker),
            "podman" => Ok(Self::Podman),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    /// Path to the engine, can also be name in PATH
    pub path: String,

    /// See `EngineKind`
    pub kind: EngineKind,
}

impl Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{:?}", self.kind).to_lowercase())
    }
}

impl Engine {
    /// Detect engine kind from the executable name, path is not checked for existance
    pub fn detect(path: &str) -> Option<Self> {
        let file_name = Path::new(path).file_name()?.to_string_lossy();
        let stem = file_name.strip_suffix(".exe").unwrap_or(&file_name);

        EngineKind::try_from(stem).ok().map(|kind| Self {
            path: path.to_string(),
            kind,
        })
    }

    /// Finds first available engine, prefers docker
    pub fn find_available_engine() -> Option<Self> {
        crate::vars::KNOWN_ENGINES
            .into_iter()
            .find(|x| executable_in_path(x))
            .and_then(Self::detect)
    }

    /// Engine explicitly chosen by the user, either a name in PATH or a literal path
    pub fn from_user(chosen: &str) -> Result<Self, EngineError> {
        if !(executable_in_path(chosen) || Path::new(chosen).exists()) {
            return Err(EngineError::NotFound(chosen.to_string()));
        }

        Self::detect(chosen).ok_or_else(|| EngineError::Unknown(chosen.to_string()))
    }

    /// Creates `std::process::Command` with program being the engine path
    pub fn command(&self) -> Command {
        Command::new(&self.path)
    }

    /// Engine version string, fails only if the engine could not be executed
    pub fn version(&self) -> Result<String, ProbeError> {
        let mut cmd = self.command();
        cmd.arg("--version");

        let output = cmd.log_output().map_err(|source| ProbeError::Launch {
            command: cmd.get_full_command(),
            source,
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Check if the engine can be executed at all, exit code is ignored
    pub fn is_available(&self) -> bool {
        self.version().is_ok()
    }

    /// Lists all containers, including the stopped ones
    pub fn list_containers(&self) -> Result<Vec<ContainerRecord>, ProbeError> {
        let mut cmd = self.command();
        cmd.args([
            "container",
            "ls",
            "--all",
            "--format",
            crate::vars::NAMES_FORMAT,
        ]);

        let output = cmd.log_output().map_err(|source| ProbeError::Launch {
            command: cmd.get_full_command(),
            source,
        })?;

        if !output.status.success() {
            return Err(ProbeError::Status {
                command: cmd.get_full_command(),
                code: output.get_code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_listing_bytes(&output.stdout).map_err(|source| ProbeError::Parse {
            command: cmd.get_full_command(),
            source,
        })
    }

    /// Check if container with exactly this name exists, whatever state it is in
    pub fn container_exists(&self, name: &str) -> Result<bool, ProbeError> {
        let exists = self.list_containers()?.iter().any(|x| x.matches(name));

        log::debug!("Container {:?} exists: {}", name, exists);

        Ok(exists)
    }
}

/// Check whether executable exists in PATH
pub fn executable_in_path(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::tests::prelude::*;

    // NOTE: copied from a host with a mix of running and exited containers
    const LISTING: &str = "docker_test_container4\ndocker_test_container1\nweb\ndb,web/db\n";

    #[test]
    fn test_detect() {
        assert_eq!(Engine::detect("docker").map(|x| x.kind), Some(EngineKind::Docker));
        assert_eq!(Engine::detect("/usr/bin/podman").map(|x| x.kind), Some(EngineKind::Podman));
        assert_eq!(Engine::detect("Podman.exe").map(|x| x.kind), Some(EngineKind::Podman));
        assert_eq!(Engine::detect("/usr/bin/nerdctl"), None);
        assert_eq!(Engine::detect(""), None);

        let engine = Engine::detect("/opt/bin/docker").unwrap();
        assert_eq!(engine.path, "/opt/bin/docker");
        assert_eq!(engine.to_string(), "docker");
    }

    #[test]
    fn test_from_user_missing() {
        assert_eq!(
            Engine::from_user("/nonexistent/docker"),
            Err(EngineError::NotFound("/nonexistent/docker".to_string()))
        );
    }

    #[test]
    fn test_from_user_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = fake_executable(dir.path(), "nerdctl", "exit 0")?;

        let chosen = path.to_string_lossy().to_string();
        assert_eq!(Engine::from_user(&chosen), Err(EngineError::Unknown(chosen.clone())));

        // existing but not executable is accepted, running it fails later
        let path = dir.path().join("podman");
        std::fs::write(&path, "")?;
        let chosen = path.to_string_lossy().to_string();
        assert_eq!(Engine::from_user(&chosen).map(|x| x.kind), Ok(EngineKind::Podman));

        Ok(())
    }

    #[test]
    fn test_missing_engine() {
        let engine = Engine {
            path: "/nonexistent/docker".to_string(),
            kind: EngineKind::Docker,
        };

        assert!(!engine.is_available());
        assert!(matches!(engine.version(), Err(ProbeError::Launch { .. })));

        let err = engine.container_exists("docker_test_container1").unwrap_err();
        assert!(matches!(err, ProbeError::Launch { .. }), "{err:?}");
        assert!(err.command().starts_with("/nonexistent/docker container ls --all"));
    }

    #[test]
    fn test_available_ignores_exit_code() -> Result<()> {
        let engine = FakeEngine::new("docker", "echo 'Docker version 27.3.1'; exit 3")?;

        assert!(engine.is_available());
        assert_eq!(engine.version()?, "Docker version 27.3.1");

        Ok(())
    }

    #[test]
    fn test_container_exists() -> Result<()> {
        let engine = FakeEngine::listing("docker", LISTING)?;

        assert!(engine.container_exists("docker_test_container1")?);
        assert!(engine.container_exists("docker_test_container4")?);
        assert!(engine.container_exists("web")?);
        assert!(engine.container_exists("db")?);

        assert!(!engine.container_exists("someother_container")?);
        assert!(!engine.container_exists("ocker_test_containe")?);
        assert!(!engine.container_exists("2docker_test_container2")?);
        assert!(!engine.container_exists("db,web/db")?);
        assert!(!engine.container_exists("")?);

        Ok(())
    }

    #[test]
    fn test_link_alias_does_not_exist() -> Result<()> {
        let engine = FakeEngine::listing("docker", "db,web/db\nweb\n")?;

        assert!(!engine.container_exists("web/db")?);
        assert!(!engine.container_exists("/web/db")?);
        assert!(engine.container_exists("db")?);
        assert!(engine.container_exists("web")?);

        Ok(())
    }

    #[test]
    fn test_container_exists_idempotent() -> Result<()> {
        let engine = FakeEngine::listing("podman", LISTING)?;

        for _ in 0..3 {
            assert!(engine.container_exists("docker_test_container4")?);
            assert!(!engine.container_exists("docker_test_container")?);
        }

        Ok(())
    }

    #[test]
    fn test_list_passes_all_flag() -> Result<()> {
        // only answer when asked for stopped containers as well
        let engine = FakeEngine::new(
            "docker",
            r#"[ "$*" = "container ls --all --format {{.Names}}" ] || exit 9
echo stopped_one"#,
        )?;

        let records = engine.list_containers()?;
        assert_eq!(records.len(), 1);
        assert!(records[0].matches("stopped_one"));

        Ok(())
    }

    #[test]
    fn test_list_empty() -> Result<()> {
        let engine = FakeEngine::listing("docker", "")?;

        assert!(engine.list_containers()?.is_empty());
        assert!(!engine.container_exists("anything")?);

        Ok(())
    }

    #[test]
    fn test_engine_failure() -> Result<()> {
        let engine = FakeEngine::new(
            "docker",
            "echo 'Cannot connect to the Docker daemon' >&2; exit 1",
        )?;

        match engine.container_exists("docker_test_container1") {
            Err(ProbeError::Status { code, stderr, .. }) => {
                assert_eq!(code, 1);
                assert_eq!(stderr, "Cannot connect to the Docker daemon");
            }
            x => panic!("Expected status error, got {x:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_unparsable_output() -> Result<()> {
        let engine = FakeEngine::listing("docker", "CONTAINER ID   NAMES\nabc123   web\n")?;

        match engine.container_exists("web") {
            Err(ProbeError::Parse { source, .. }) => assert_eq!(
                source,
                ParseError::InvalidName {
                    line: 1,
                    token: "CONTAINER ID   NAMES".to_string(),
                }
            ),
            x => panic!("Expected parse error, got {x:?}"),
        }

        Ok(())
    }

    // NOTE: these need a real docker and pull busybox, run them with `cargo test -- --ignored`
    #[test]
    #[ignore = "requires docker"]
    fn test_has_docker() {
        let engine = Engine::detect("docker").unwrap();
        assert!(engine.is_available());
    }

    #[test]
    #[ignore = "requires docker"]
    fn test_detect_running_container() -> Result<()> {
        let engine = Engine::detect("docker").unwrap();
        let _container = ContainerFixture::running(&engine, "docker_test_container1")?;

        assert!(engine.container_exists("docker_test_container1")?);
        assert!(!engine.container_exists("someother_container")?);

        Ok(())
    }

    #[test]
    #[ignore = "requires docker"]
    fn test_detect_stopped_container() -> Result<()> {
        let engine = Engine::detect("docker").unwrap();
        let _container = ContainerFixture::stopped(&engine, "docker_test_container4")?;

        assert!(engine.container_exists("docker_test_container4")?);
        assert!(!engine.container_exists("someother_container")?);
        assert!(!engine.container_exists("ocker_test_containe")?);
        assert!(!engine.container_exists("2docker_test_container2")?);

        // nothing changed so neither should the answer
        assert!(engine.container_exists("docker_test_container4")?);

        Ok(())
    }
}
