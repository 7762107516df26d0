use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

pub struct Args {
    pub paths: Vec<String>,
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Args {
    fn build_cli() -> App<'static> {
        App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::with_name("paths")
                    .help("Files or directories to list (defaults to the current directory)")
                    .value_name("PATH")
                    .index(1)
                    .multiple(true),
            )
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .takes_value(true)
                    .value_name("FILE")
                    .help("Read settings from FILE instead of ~/.config/lsl/config.toml"),
            )
            .arg(
                Arg::with_name("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Log debug details to stderr"),
            )
    }

    pub fn parse() -> Self {
        let matches = Self::build_cli().get_matches();
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Args {
            paths: matches
                .values_of("paths")
                .map(|values| values.map(String::from).collect())
                .unwrap_or_default(),
            config_path: matches.value_of("config").map(PathBuf::from),
            verbose: matches.is_present("verbose"),
        }
    }
}
