mod config;
mod logging;
mod print;

use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use argh::FromArgs;
use strum_macros::{AsRefStr, EnumString};
use termseg::{AmbiguousWidth, Options};

/// What to print for the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Mode {
    Grapheme,
    Word,
    Sentence,
    Line,
    /// Grapheme clusters with the other boundaries at their ends
    Step,
}

#[derive(FromArgs)]
/// Print the grapheme clusters, words, sentences or line break
/// opportunities of a file and their display widths.
struct Cli {
    /// file to read, standard input if not given
    #[argh(positional)]
    file: Option<PathBuf>,

    /// grapheme, word, sentence, line or step
    #[argh(option, short = 'u', default = "Mode::Grapheme")]
    unit: Mode,

    /// configuration file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// display ambiguous width characters as wide
    #[argh(switch, short = 'w')]
    wide: bool,

    /// only print the segment count and total width
    #[argh(switch, short = 't')]
    total: bool,

    /// turn debugging information on
    #[argh(switch, short = 'd')]
    debug: bool,
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();

    if let Err(e) = logging::setup(cli.debug) {
        eprintln!("Failed to setup logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("termseg: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config::read_config(cli.config.as_deref())?;
    let mut options: Options = config.segment;
    if cli.wide {
        options.width.ambiguous = AmbiguousWidth::Wide;
    }

    let input = read_input(cli.file.as_ref())?;
    log::info!(
        "Segmenting {} bytes by {}",
        input.len(),
        cli.unit.as_ref()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.total {
        print::totals(&mut out, &input, cli.unit, &options)?;
    } else {
        print::segments(&mut out, &input, cli.unit, &options)?;
    }
    out.flush()?;

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => {
            let bytes = fs::read(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
            Ok(bytes)
        }
        None => {
            let mut bytes = vec![];
            io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}
