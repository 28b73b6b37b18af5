use crate::cli::CmdListArgs;
use crate::ExitResult;
use anyhow::Context;
use conprobe::Engine;

pub fn print_containers(engine: Engine, cli_args: CmdListArgs) -> ExitResult {
    let result = engine
        .list_containers()
        .with_context(|| format!("Could not list containers using {engine}"))
        .and_then(|records| {
            if cli_args.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for name in records.iter().flat_map(|x| x.names.iter()) {
                    println!("{}", name);
                }
            }

            Ok(())
        });

    result.map_err(|err| {
        eprintln!("{:#}", err);
        1
    })
}
