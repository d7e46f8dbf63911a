use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::info;

mod logging;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Binary,
    C,
    Json,
    Summary,
}

#[derive(Parser, Debug)]
#[command(
    name = "charmap-cli",
    about = "Turn POSIX charmap files into locale lookup tables",
    version
)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Binary)]
    format: FormatArg,

    /// Table name (defaults to the charmap's <code_set_name>)
    #[arg(long)]
    name: Option<String>,

    /// Treat recoverable problems as errors
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Check that the portable character set is fully defined
    #[arg(long, default_value_t = false)]
    require_portable: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input charmap (defaults to stdin)
    input: Option<PathBuf>,
}

fn summary(charmap: &charmap::Charmap, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "code_set_name: {}\n",
        charmap.code_set_name.as_deref().unwrap_or("-")
    ));
    if !charmap.aliases.is_empty() {
        out.push_str(&format!("aliases: {}\n", charmap.aliases.join(", ")));
    }
    out.push_str(&format!("mb_cur_min: {}\n", charmap.mb_cur_min));
    out.push_str(&format!("mb_cur_max: {}\n", charmap.mb_cur_max));
    out.push_str(&format!("characters: {}\n", charmap.len()));
    match charmap::build_table(charmap, name) {
        Ok(table) => out.push_str(&format!("tabulated: {}\n", table.len())),
        Err(_) => out.push_str("tabulated: 0\n"),
    }
    let missing = charmap.missing_portable();
    out.push_str(&format!("missing portable: {}\n", missing.len()));
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let options = charmap::Options {
        strict: args.strict,
        require_portable: args.require_portable,
    };

    let parsed = match &args.input {
        Some(path) => charmap::parse_charmap(path, &options)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin().read_to_string(&mut buf)?;
            charmap::parse_charmap_str(&buf, &options)?
        }
    };

    let name = args
        .name
        .clone()
        .or_else(|| parsed.code_set_name.clone())
        .or_else(|| {
            args.input
                .as_ref()
                .and_then(|p| p.file_stem())
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "charmap".to_string());
    info!(
        "parsed {} characters, mb_cur_min {} mb_cur_max {}",
        parsed.len(),
        parsed.mb_cur_min,
        parsed.mb_cur_max
    );

    let bytes = match args.format {
        FormatArg::Binary => charmap::render(&parsed, &name, charmap::TableFormat::Binary)?,
        FormatArg::C => charmap::render(&parsed, &name, charmap::TableFormat::C)?,
        FormatArg::Json if args.pretty => {
            let mut s = serde_json::to_string_pretty(&parsed)?;
            s.push('\n');
            s.into_bytes()
        }
        FormatArg::Json => {
            let mut v = charmap::render(&parsed, &name, charmap::TableFormat::Json)?;
            v.push(b'\n');
            v
        }
        FormatArg::Summary => summary(&parsed, &name).into_bytes(),
    };

    match &args.output {
        Some(path) => {
            let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            f.write_all(&bytes)?;
        }
        None => {
            let mut out = stdout().lock();
            out.write_all(&bytes)?;
            out.flush()?;
        }
    }

    Ok(())
}
