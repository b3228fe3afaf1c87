//! av <-> BV identifier codec
//!
//! A BV id is a 12 character string: the fixed scaffold `BV1  4 1 7  ` whose
//! six blank slots carry a base-58 number. The number is the av id XORed with
//! [`XOR_CONSTANT`] and offset by [`ADD_CONSTANT`]; its digits are scattered
//! over the slots in the order given by [`DIGIT_POSITIONS`].

use crate::error::CodecError;

/// Digit alphabet, index is the digit value.
pub const ALPHABET: &[u8; 58] = b"fZodR9XQDSUm21yCkr6zBqiveYah8bt4xsWpHnJE7jL5VG3guMTKNPAwcF";

/// Output slot of each digit, least significant first.
pub const DIGIT_POSITIONS: [usize; 6] = [11, 10, 3, 8, 4, 6];

pub const XOR_CONSTANT: i64 = 177_451_812;
pub const ADD_CONSTANT: i64 = 8_728_348_608;

/// Length of every BV id.
pub const BV_LEN: usize = 12;

const SCAFFOLD: [u8; BV_LEN] = *b"BV1  4 1 7  ";
const BASE: i64 = 58;
const POW58: [i64; 6] = [1, 58, 3_364, 195_112, 11_316_496, 656_356_768];

/// Exclusive upper bound of the transformed value (58^6).
const MAX_ENCODED: i64 = POW58[5] * BASE;

const NOT_A_DIGIT: u8 = u8::MAX;
const REVERSE_ALPHABET: [u8; 128] = build_reverse_alphabet();

const fn build_reverse_alphabet() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn digit_value(ch: char) -> Option<i64> {
    if !ch.is_ascii() {
        return None;
    }
    match REVERSE_ALPHABET[ch as usize] {
        NOT_A_DIGIT => None,
        v => Some(i64::from(v)),
    }
}

/// Decode a BV id into its av number.
///
/// Only the six digit slots are read; the scaffold characters are not checked.
/// Positions are counted in characters, not bytes.
pub fn bv_to_av(bvid: &str) -> Result<i64, CodecError> {
    let chars: Vec<char> = bvid.chars().take(BV_LEN).collect();
    if chars.len() < BV_LEN {
        return Err(CodecError::TooShort { len: chars.len() });
    }

    let mut r = 0i64;
    for (i, &position) in DIGIT_POSITIONS.iter().enumerate() {
        let ch = chars[position];
        let v = digit_value(ch).ok_or(CodecError::InvalidChar { position, ch })?;
        r += v * POW58[i];
    }

    Ok((r - ADD_CONSTANT) ^ XOR_CONSTANT)
}

/// Encode an av number as a BV id.
///
/// Fails when the transformed value does not fit in six base-58 digits,
/// which covers negative results and overflow near the ends of the i64 range.
pub fn av_to_bv(aid: i64) -> Result<String, CodecError> {
    let x = (aid ^ XOR_CONSTANT)
        .checked_add(ADD_CONSTANT)
        .filter(|x| (0..MAX_ENCODED).contains(x))
        .ok_or(CodecError::OutOfRange { aid })?;

    let mut out = SCAFFOLD;
    for (i, &position) in DIGIT_POSITIONS.iter().enumerate() {
        out[position] = ALPHABET[((x / POW58[i]) % BASE) as usize];
    }

    Ok(out.iter().map(|&b| char::from(b)).collect())
}
