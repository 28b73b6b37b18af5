use crate::cli::CmdExistsArgs;
use crate::ExitResult;
use conprobe::Engine;

pub fn container_exists(engine: Engine, cli_args: CmdExistsArgs) -> ExitResult {
    // whatever state it is, it exists
    match engine.container_exists(&cli_args.name) {
        Ok(true) => Ok(()),
        Ok(false) => Err(1),
        Err(err) => {
            eprintln!("Error checking if container {:?} exists: {:#}", cli_args.name, anyhow::Error::from(err));
            Err(2)
        }
    }
}
