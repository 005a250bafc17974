use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::num_vec::Vector3;
use crate::orthogonalize::CalculationResult;
use crate::step::Dimension;




/**
 * A serializable record of a walkthrough: its inputs, the step reached, and
 * the calculation result.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub dimension: Dimension,
    pub step: u8,
    pub vectors: Vec<Vector3>,
    pub result: CalculationResult,
}




/**
 * Binary formats a snapshot can be written in
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Cbor,
    MessagePack,
}




// ============================================================================
impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cbor" => Ok(Format::Cbor),
            "msgpack" | "mpk" => Ok(Format::MessagePack),
            _ => Err(Error::Decode(format!("unknown format {:?}", s))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Cbor => write!(f, "cbor"),
            Format::MessagePack => write!(f, "msgpack"),
        }
    }
}




// ============================================================================
pub fn encode<W: Write>(snapshot: &Snapshot, format: Format, mut writer: W) -> Result<()> {
    match format {
        Format::Cbor => {
            ciborium::ser::into_writer(snapshot, &mut writer).map_err(|e| Error::Encode(format!("{:?}", e)))?
        }
        Format::MessagePack => {
            rmp_serde::encode::write_named(&mut writer, snapshot).map_err(|e| Error::Encode(e.to_string()))?
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn decode<R: Read>(format: Format, reader: R) -> Result<Snapshot> {
    match format {
        Format::Cbor => ciborium::de::from_reader(reader).map_err(|e| Error::Decode(format!("{:?}", e))),
        Format::MessagePack => rmp_serde::decode::from_read(reader).map_err(|e| Error::Decode(e.to_string())),
    }
}
