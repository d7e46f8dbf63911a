#![doc = include_str!("../README.md")]

pub mod charmap;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod portable;

pub use crate::charmap::{CharEntry, Charmap};
pub use crate::encode::table::{Decoded, LocaleTable, Record};
pub use crate::error::{Error, Result};
pub use crate::options::{Options, TableFormat};

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

/// `mb_cur_min` when the header does not declare one.
pub const DEFAULT_MB_CUR_MIN: u8 = 1;
/// `mb_cur_max` when the header does not declare one.
pub const DEFAULT_MB_CUR_MAX: u8 = 1;
/// Upper bound on the width of any character.
pub const MB_LEN_MAX: usize = 16;

/// Open the charmap at `path` and parse it line by line.
pub fn parse_charmap<P: AsRef<Path>>(path: P, options: &Options) -> Result<Charmap> {
    let file = File::open(path.as_ref())?;
    let mut text = String::new();
    for line in BufReader::new(file).lines() {
        text.push_str(&line?);
        text.push('\n');
    }
    parse_charmap_str(&text, options)
}

pub fn parse_charmap_str(s: &str, options: &Options) -> Result<Charmap> {
    crate::decode::parser::parse_str(s, options)
}

pub fn parse_charmap_reader<R: Read>(mut reader: R, options: &Options) -> Result<Charmap> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_charmap_str(&s, options)
}

/// Build the lookup table for `charmap`. `name` is truncated to 8 bytes in
/// the binary form.
pub fn build_table(charmap: &Charmap, name: &str) -> Result<LocaleTable> {
    LocaleTable::from_charmap(charmap, name)
}

/// Render `charmap` in the requested output format.
pub fn render(charmap: &Charmap, name: &str, format: TableFormat) -> Result<Vec<u8>> {
    match format {
        TableFormat::Binary => Ok(build_table(charmap, name)?.to_bytes()),
        TableFormat::C => {
            let table = build_table(charmap, name)?;
            Ok(crate::encode::c_source::to_c_source(&table).into_bytes())
        }
        #[cfg(feature = "json")]
        TableFormat::Json => Ok(serde_json::to_vec(charmap)?),
        #[cfg(not(feature = "json"))]
        TableFormat::Json => Err(Error::Table("JSON output needs the `json` feature".to_string())),
    }
}

pub fn render_to_writer<W: Write>(
    mut writer: W,
    charmap: &Charmap,
    name: &str,
    format: TableFormat,
) -> Result<()> {
    let bytes = render(charmap, name, format)?;
    writer.write_all(&bytes)?;
    Ok(())
}
