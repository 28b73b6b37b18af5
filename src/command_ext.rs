use std::process::{Command, ExitStatus, Output};

#[allow(unused_imports)]
pub mod command_extensions {
    pub use super::{CommandExt, CommandOutputExt};
    pub use std::process::Command;
}

/// Simple extension trait to get a consistent exit code out of a finished process
pub trait CommandOutputExt {
    /// Exit code that fits into `std::process::ExitCode`
    ///
    /// Equal to 1 in case of signal termination (or any exit code larger than 255)
    fn get_code(&self) -> u8;
}

impl CommandOutputExt for ExitStatus {
    fn get_code(&self) -> u8 {
        // termination by signal has no code, and codes above 255 do not fit, both still failed
        TryInto::<u8>::try_into(self.code().unwrap_or(1)).unwrap_or(1)
    }
}

impl CommandOutputExt for Output {
    fn get_code(&self) -> u8 {
        self.status.get_code()
    }
}

pub trait CommandExt {
    /// Returns the command with all the arguments as a `String`
    fn get_full_command(&self) -> String;

    /// Logs command and output after running `Command::output`
    fn log_output(&mut self) -> std::io::Result<Output>;
}

impl CommandExt for Command {
    fn get_full_command(&self) -> String {
        let mut parts = vec![self.get_program().to_string_lossy()];
        parts.extend(self.get_args().map(|x| x.to_string_lossy()));

        parts.join(" ")
    }

    fn log_output(&mut self) -> std::io::Result<Output> {
        let output = self.output();
        match output.as_ref() {
            Ok(output) => log::debug!(
                "Command {:?} (output)\n  STDOUT: {:?}\n  STDERR: {:?}\n  STATUS: {:?}",
                self.get_full_command(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
                output.status,
            ),
            Err(err) => log::debug!(
                "Command {:?} (output)\n  ERROR: {:?}",
                self.get_full_command(),
                err,
            ),
        }

        output
    }
}
