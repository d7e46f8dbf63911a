//! Packed table layout, little-endian:
//!
//! ```text
//! 0   name[8]      NUL padded, cut on a UTF-8 character boundary
//! 8   magic "LCMP"
//! 12  version u8
//! 13  mb_cur_min u8
//! 14  mb_cur_max u8
//! 15  reserved u8
//! 16  count u32
//! 20  count x { ucs u32, len u8, bytes[mb_cur_max] }
//! ..  count x u32 record index, ordered by ucs
//! ```
//!
//! The 8 byte name matches the identifier the firmware expects at the start
//! of its locale partition. Trailing bytes after the index are ignored so a
//! whole partition image can be handed to [`LocaleTable::from_bytes`].

use crate::MB_LEN_MAX;
use crate::encode::table::{LocaleTable, Record};
use crate::error::{Error, Result};

pub const NAME_LEN: usize = 8;
pub const MAGIC: &[u8; 4] = b"LCMP";
pub const VERSION: u8 = 1;
pub const HEADER_LEN: usize = 20;

fn table_err(message: impl Into<String>) -> Error {
    Error::Table(message.into())
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| table_err(format!("truncated at offset {}", self.pos)))?;
        let out = &self.data[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

impl LocaleTable {
    /// Size in bytes of the packed table.
    pub fn encoded_len(&self) -> usize {
        let record = 5 + usize::from(self.mb_cur_max);
        HEADER_LEN + self.records.len() * (record + 4)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let width = usize::from(self.mb_cur_max);
        let mut out = Vec::with_capacity(self.encoded_len());

        let mut name = [0u8; NAME_LEN];
        let mut n = self.name.len().min(NAME_LEN);
        while !self.name.is_char_boundary(n) {
            n -= 1;
        }
        name[..n].copy_from_slice(&self.name.as_bytes()[..n]);
        out.extend_from_slice(&name);

        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        out.push(self.mb_cur_min);
        out.push(self.mb_cur_max);
        out.push(0);
        out.extend_from_slice(&(self.records.len() as u32).to_le_bytes());

        for r in &self.records {
            out.extend_from_slice(&r.ucs.to_le_bytes());
            out.push(r.bytes.len() as u8);
            out.extend_from_slice(&r.bytes);
            out.resize(out.len() + width - r.bytes.len(), 0);
        }
        for i in &self.by_ucs {
            out.extend_from_slice(&i.to_le_bytes());
        }
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut rd = Reader { data, pos: 0 };
        let raw_name = rd.take(NAME_LEN)?;
        let name_len = raw_name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        let name = String::from_utf8_lossy(&raw_name[..name_len]).into_owned();

        if rd.take(4)? != MAGIC {
            return Err(table_err("bad magic"));
        }
        let version = rd.u8()?;
        if version != VERSION {
            return Err(table_err(format!("unsupported version {version}")));
        }
        let mb_cur_min = rd.u8()?;
        let mb_cur_max = rd.u8()?;
        rd.u8()?;
        if mb_cur_min == 0 || mb_cur_min > mb_cur_max || usize::from(mb_cur_max) > MB_LEN_MAX {
            return Err(table_err(format!(
                "bad character widths {mb_cur_min}..={mb_cur_max}"
            )));
        }
        let count = rd.u32()? as usize;
        let width = usize::from(mb_cur_max);
        let needed = count
            .checked_mul(5 + width + 4)
            .and_then(|n| n.checked_add(HEADER_LEN));
        if needed.is_none_or(|n| n > data.len()) {
            return Err(table_err(format!("{count} records do not fit in {} bytes", data.len())));
        }

        let mut records: Vec<Record> = Vec::with_capacity(count);
        for i in 0..count {
            let ucs = rd.u32()?;
            let len = usize::from(rd.u8()?);
            let slot = rd.take(width)?;
            if len < usize::from(mb_cur_min) || len > width {
                return Err(table_err(format!("record {i}: length {len} out of range")));
            }
            if char::from_u32(ucs).is_none() {
                return Err(table_err(format!("record {i}: U+{ucs:X} is not a scalar value")));
            }
            let bytes = slot[..len].to_vec();
            if let Some(prev) = records.last() {
                if prev.bytes >= bytes {
                    return Err(table_err(format!("record {i}: not in byte order")));
                }
            }
            records.push(Record { ucs, bytes });
        }

        let mut seen = vec![false; count];
        let mut by_ucs = Vec::with_capacity(count);
        let mut prev_ucs = 0u32;
        for _ in 0..count {
            let i = rd.u32()?;
            let slot = seen
                .get_mut(i as usize)
                .ok_or_else(|| table_err(format!("index entry {i} out of range")))?;
            if *slot {
                return Err(table_err(format!("index entry {i} repeated")));
            }
            *slot = true;
            let ucs = records[i as usize].ucs;
            if ucs < prev_ucs {
                return Err(table_err("reverse index not ordered by scalar value"));
            }
            prev_ucs = ucs;
            by_ucs.push(i);
        }

        Ok(LocaleTable {
            name,
            mb_cur_min,
            mb_cur_max,
            records,
            by_ucs,
        })
    }
}
