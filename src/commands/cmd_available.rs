use crate::ExitResult;
use conprobe::Engine;

pub fn check_available(engine: Engine) -> ExitResult {
    if engine.is_available() {
        Ok(())
    } else {
        eprintln!("Engine {:?} could not be executed", engine.path);
        Err(1)
    }
}
