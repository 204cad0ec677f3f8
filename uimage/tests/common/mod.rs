//! Test-only uImage encoder
//!
//! Mirrors the crate's unit-test builders in `src/test_util.rs`.

#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};
use uimage::crc::{HCRC_RANGE, calculate_crc32, header_crc32};
use uimage::image_header::IH_NMLEN;
use uimage::{IH_HEADER_SIZE, IH_MAGIC, ImageHeader};

pub const IH_TYPE_KERNEL: u8 = 2;
pub const IH_TYPE_MULTI: u8 = 4;
pub const IH_COMP_NONE: u8 = 0;
pub const IH_COMP_GZIP: u8 = 1;

pub fn header(type_: u8, comp: u8, name: &str) -> ImageHeader {
    ImageHeader {
        magic: IH_MAGIC,
        hcrc: 0,
        time: 1_700_000_000,
        size: 0,
        load: 0x8000_8000,
        ep: 0x8000_8000,
        dcrc: 0,
        os: 5,
        arch: 2,
        type_,
        comp,
        name: name.to_string(),
    }
}

/// 64-byte wire form of `header`, stored checksums taken as-is
pub fn encode(header: &ImageHeader) -> [u8; IH_HEADER_SIZE] {
    let mut buf = Vec::with_capacity(IH_HEADER_SIZE);
    for word in [
        header.magic,
        header.hcrc,
        header.time,
        header.size,
        header.load,
        header.ep,
        header.dcrc,
    ] {
        buf.write_u32::<BigEndian>(word).unwrap();
    }
    for byte in [header.os, header.arch, header.type_, header.comp] {
        buf.write_u8(byte).unwrap();
    }
    let mut name = [0u8; IH_NMLEN];
    let len = header.name.len().min(IH_NMLEN);
    name[..len].copy_from_slice(&header.name.as_bytes()[..len]);
    buf.extend_from_slice(&name);

    buf.try_into().unwrap()
}

/// Store the correct header checksum
pub fn seal(mut bytes: [u8; IH_HEADER_SIZE]) -> [u8; IH_HEADER_SIZE] {
    let crc = header_crc32(&bytes).unwrap();
    bytes[HCRC_RANGE].copy_from_slice(&crc.to_be_bytes());
    bytes
}

/// Length table plus 4-byte aligned parts
pub fn multi_payload(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    for part in parts {
        out.write_u32::<BigEndian>(part.len() as u32).unwrap();
    }
    out.write_u32::<BigEndian>(0).unwrap();
    for (i, part) in parts.iter().enumerate() {
        out.extend_from_slice(part);
        if i + 1 < parts.len() {
            out.resize(out.len() + (4 - part.len() % 4) % 4, 0);
        }
    }
    out
}

/// A complete, correctly sealed image around `payload`
pub fn build_image(mut header: ImageHeader, payload: &[u8]) -> Vec<u8> {
    header.size = payload.len() as u32;
    header.dcrc = calculate_crc32(payload);
    let mut image = seal(encode(&header)).to_vec();
    image.extend_from_slice(payload);
    image
}
