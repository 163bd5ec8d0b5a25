//! Text codec for persisted occupancy fields
//!
//! Layout:
//!
//! ```text
//! <half_width>
//! <half_height>
//! <half_depth>
//! <flag> <flag> ... <flag>
//! ```
//!
//! Flags follow X-outer/Y-middle/Z-inner traversal order, a true flag meaning
//! the cell is blocked. Every flag is followed by a single space, so the field
//! is one line ending in a space with no trailing newline. Readers treat any
//! whitespace as a separator.

use std::io::{Read, Write};

use bitvec::prelude::*;
use tracing::trace;

use crate::io::configuration::MAX_HALF_EXTENT;
use crate::io::error::{Result, malformed_input, stream_error};
use crate::spatial::extent::HalfExtents;
use crate::spatial::occupancy::Occupancy;

const HEADER_FIELDS: [&str; 3] = ["half_width", "half_height", "half_depth"];

/// Write the three-line extents header
///
/// # Errors
///
/// Returns [`crate::GridError::Io`] if the writer fails
pub fn write_header<W: Write>(writer: &mut W, extents: HalfExtents) -> Result<()> {
    write!(
        writer,
        "{}\n{}\n{}\n",
        extents.half_width(),
        extents.half_height(),
        extents.half_depth()
    )
    .map_err(|e| stream_error("writing header", e))
}

/// Write blocked flags as `1`/`0` tokens, each followed by a space
///
/// # Errors
///
/// Returns [`crate::GridError::Io`] if the writer fails
pub fn write_flags<W, I>(writer: &mut W, flags: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = bool>,
{
    for blocked in flags {
        let token: &[u8] = if blocked { b"1 " } else { b"0 " };
        writer
            .write_all(token)
            .map_err(|e| stream_error("writing occupancy flags", e))?;
    }
    Ok(())
}

/// Write a complete occupancy field: header then flags
///
/// # Errors
///
/// Returns [`crate::GridError::Io`] if the writer fails
pub fn write_occupancy<W: Write>(writer: &mut W, occupancy: &Occupancy) -> Result<()> {
    write_header(writer, occupancy.extents())?;
    write_flags(writer, occupancy.flags().iter().by_vals())
}

/// Parse a persisted occupancy field
///
/// The whole stream is validated before anything is returned. Tokens after the
/// last flag are ignored.
///
/// # Errors
///
/// Returns [`crate::GridError::Io`] if the reader fails or is not UTF-8, and
/// [`crate::GridError::MalformedInput`] if a header value is missing, negative
/// or too large, or a flag is missing or not a boolean
pub fn read_occupancy<R: Read>(mut reader: R) -> Result<Occupancy> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| stream_error("reading grid stream", e))?;
    parse_occupancy(&text)
}

/// Parse a persisted occupancy field from text
///
/// # Errors
///
/// Returns [`crate::GridError::MalformedInput`] under the same conditions as
/// [`read_occupancy`]
pub fn parse_occupancy(text: &str) -> Result<Occupancy> {
    let mut tokens = text.split_ascii_whitespace().enumerate();

    let mut header = [0_u32; 3];
    for (position, (slot, name)) in header.iter_mut().zip(HEADER_FIELDS).enumerate() {
        let (index, token) = tokens
            .next()
            .ok_or_else(|| malformed_input(position, &format!("missing {name}")))?;
        *slot = parse_half_extent(index, name, token)?;
    }

    let [half_width, half_height, half_depth] = header;
    let extents = HalfExtents::new(half_width, half_height, half_depth)
        .map_err(|e| malformed_input(HEADER_FIELDS.len(), &e))?;

    let expected = extents.slot_count();
    let mut blocked = BitVec::with_capacity(expected);
    for cell in 0..expected {
        let token_index = HEADER_FIELDS.len() + cell;
        let (_, token) = tokens.next().ok_or_else(|| {
            malformed_input(
                token_index,
                &format!("stream ended after {cell} of {expected} occupancy flags"),
            )
        })?;
        let flag = parse_flag(token).ok_or_else(|| {
            malformed_input(
                token_index,
                &format!("expected occupancy flag 0/1/true/false, found '{token}'"),
            )
        })?;
        blocked.push(flag);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        trace!(trailing, "ignoring tokens after occupancy field");
    }

    Occupancy::from_flags(extents, blocked)
}

/// Interpret a flag token, `None` if it is not a recognised boolean
pub fn parse_flag(token: &str) -> Option<bool> {
    match token {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

fn parse_half_extent(index: usize, name: &str, token: &str) -> Result<u32> {
    let value: i64 = token
        .parse()
        .map_err(|e| malformed_input(index, &format!("{name} '{token}' is not an integer: {e}")))?;

    if value < 0 {
        return Err(malformed_input(
            index,
            &format!("{name} must be non-negative, found {value}"),
        ));
    }

    u32::try_from(value)
        .ok()
        .filter(|&v| v <= MAX_HALF_EXTENT)
        .ok_or_else(|| {
            malformed_input(
                index,
                &format!("{name} {value} exceeds maximum {MAX_HALF_EXTENT}"),
            )
        })
}

