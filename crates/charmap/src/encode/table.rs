use std::collections::BTreeMap;

use log::{debug, warn};

use crate::charmap::Charmap;
use crate::error::{Error, Result};

/// One mapping between an encoded byte sequence and a Unicode scalar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub ucs: u32,
    pub bytes: Vec<u8>,
}

/// Result of decoding the start of a byte string, in the manner of `mbrtowc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Char { ucs: u32, len: usize },
    /// The input is a proper prefix of at least one encoding.
    Incomplete,
    Invalid,
}

/// Lookup table generated from a charmap.
///
/// `records` is sorted by encoded bytes for forward lookups; `by_ucs` holds
/// record indices sorted by scalar value for reverse lookups. When a scalar
/// value has several encodings the earliest definition sorts first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    pub(crate) name: String,
    pub(crate) mb_cur_min: u8,
    pub(crate) mb_cur_max: u8,
    pub(crate) records: Vec<Record>,
    pub(crate) by_ucs: Vec<u32>,
}

impl LocaleTable {
    pub fn from_charmap(charmap: &Charmap, name: &str) -> Result<Self> {
        // bytes -> (ucs, definition order)
        let mut forward: BTreeMap<&[u8], (u32, usize)> = BTreeMap::new();
        for (order, entry) in charmap.iter().enumerate() {
            let Some(ucs) = entry.ucs else {
                debug!("<{}> names no Unicode scalar value, skipped", entry.name);
                continue;
            };
            match forward.get(entry.bytes.as_slice()) {
                Some(&(existing, _)) if existing != ucs => {
                    warn!(
                        "<{}> reuses the encoding of U+{existing:04X}, keeping the first",
                        entry.name
                    );
                }
                Some(_) => {}
                None => {
                    forward.insert(entry.bytes.as_slice(), (ucs, order));
                }
            }
        }
        if forward.is_empty() {
            return Err(Error::Table(
                "charmap defines no <Uxxxx> characters to tabulate".to_string(),
            ));
        }

        let mut orders = Vec::with_capacity(forward.len());
        let records: Vec<Record> = forward
            .into_iter()
            .map(|(bytes, (ucs, order))| {
                orders.push(order);
                Record {
                    ucs,
                    bytes: bytes.to_vec(),
                }
            })
            .collect();
        let mut by_ucs: Vec<u32> = (0..records.len() as u32).collect();
        by_ucs.sort_by_key(|&i| (records[i as usize].ucs, orders[i as usize]));

        Ok(Self {
            name: name.to_string(),
            mb_cur_min: charmap.mb_cur_min,
            mb_cur_max: charmap.mb_cur_max,
            records,
            by_ucs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mb_cur_min(&self) -> u8 {
        self.mb_cur_min
    }

    pub fn mb_cur_max(&self) -> u8 {
        self.mb_cur_max
    }

    /// Records in forward (byte) order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record indices in reverse (scalar value) order.
    pub fn reverse_index(&self) -> &[u32] {
        &self.by_ucs
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode the character at the start of `input`.
    pub fn decode(&self, input: &[u8]) -> Decoded {
        if input.is_empty() {
            return Decoded::Incomplete;
        }
        let longest = input.len().min(usize::from(self.mb_cur_max));
        for len in usize::from(self.mb_cur_min.max(1))..=longest {
            let candidate = &input[..len];
            if let Ok(i) = self
                .records
                .binary_search_by(|r| r.bytes.as_slice().cmp(candidate))
            {
                return Decoded::Char {
                    ucs: self.records[i].ucs,
                    len,
                };
            }
        }
        if input.len() < usize::from(self.mb_cur_max) {
            let i = self
                .records
                .partition_point(|r| r.bytes.as_slice() < input);
            if let Some(r) = self.records.get(i) {
                if r.bytes.len() > input.len() && r.bytes.starts_with(input) {
                    return Decoded::Incomplete;
                }
            }
        }
        Decoded::Invalid
    }

    /// Encoding of a scalar value, if the character set has one.
    pub fn encode(&self, ucs: u32) -> Option<&[u8]> {
        let i = self
            .by_ucs
            .partition_point(|&r| self.records[r as usize].ucs < ucs);
        let record = &self.records[*self.by_ucs.get(i)? as usize];
        (record.ucs == ucs).then_some(record.bytes.as_slice())
    }

    /// Decode a whole byte string. Stops at the first invalid or truncated
    /// sequence and returns its offset as the error.
    pub fn decode_all(&self, mut input: &[u8]) -> core::result::Result<Vec<u32>, usize> {
        let total = input.len();
        let mut out = Vec::new();
        while !input.is_empty() {
            match self.decode(input) {
                Decoded::Char { ucs, len } => {
                    out.push(ucs);
                    input = &input[len..];
                }
                Decoded::Incomplete | Decoded::Invalid => return Err(total - input.len()),
            }
        }
        Ok(out)
    }
}
