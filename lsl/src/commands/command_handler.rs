use crate::commands::args::Args;
use crate::config::Config;
use crate::error::{LslError, Result};
use crate::listing::{Listing, ListingOutcome};
use log::debug;
use std::io::{self, BufWriter};
use std::process::ExitCode;

pub fn handle_command(args: &Args, config: &Config) -> Result<ExitCode> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut listing = Listing::new(config, BufWriter::new(stdout.lock()), stderr.lock());

    let outcome = match listing.run(&args.paths).and_then(|_| listing.flush()) {
        Ok(()) => listing.outcome(),
        Err(err) if is_broken_pipe(&err) => {
            debug!("output closed early, stopping");
            listing.outcome()
        }
        Err(err) => return Err(err),
    };
    debug!(
        "{} argument(s) resolved, {} diagnostic(s)",
        outcome.resolved, outcome.issues
    );

    Ok(exit_code(outcome))
}

fn is_broken_pipe(err: &LslError) -> bool {
    matches!(err, LslError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
}

fn exit_code(outcome: ListingOutcome) -> ExitCode {
    if outcome.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;

    #[test]
    fn only_broken_pipes_stop_quietly() {
        let closed = LslError::Io(io::Error::from(io::ErrorKind::BrokenPipe));
        let denied = LslError::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        let config = LslError::Config(ConfigErrorKind::InvalidPath("x".to_string()));
        assert!(is_broken_pipe(&closed));
        assert!(!is_broken_pipe(&denied));
        assert!(!is_broken_pipe(&config));
    }
}
