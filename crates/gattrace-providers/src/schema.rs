use crate::error::Error;
use gattrace_types::{AttRecord, LinkContext};
use serde::Deserialize;

// Serde model of the tshark `-T json` export: an array of packet objects,
// each carrying its dissection under `_source.layers`. Layer objects use
// fully-qualified field keys ("btatt.opcode"); everything we don't need is
// ignored. Field values stay in the decoder's string form.

#[derive(Debug, Deserialize)]
pub(crate) struct ExportPacket {
    #[serde(rename = "_source")]
    pub source: PacketSource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PacketSource {
    #[serde(default)]
    pub layers: Layers,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Layers {
    #[serde(default)]
    pub frame: Option<FrameLayer>,
    #[serde(default)]
    pub btle: Option<BtleLayer>,
    #[serde(default)]
    pub btatt: Option<BtattLayer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FrameLayer {
    #[serde(rename = "frame.number", default)]
    pub number: FieldValue,
    #[serde(rename = "frame.time_epoch", default)]
    pub time_epoch: FieldValue,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BtleLayer {
    #[serde(rename = "btle.connection_handle", default)]
    pub connection_handle: FieldValue,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BtattLayer {
    #[serde(rename = "btatt.opcode", default)]
    pub opcode: FieldValue,
    #[serde(rename = "btatt.handle", default)]
    pub handle: FieldValue,
    #[serde(rename = "btatt.starting_handle", default)]
    pub starting_handle: FieldValue,
    #[serde(rename = "btatt.ending_handle", default)]
    pub ending_handle: FieldValue,
    #[serde(rename = "btatt.value", default)]
    pub value: FieldValue,
    #[serde(rename = "btatt.uuid16", default)]
    pub uuid16: FieldValue,
    #[serde(rename = "btatt.uuid128", default)]
    pub uuid128: FieldValue,
}

impl Layers {
    /// Map a dissected packet to an `AttRecord`.
    ///
    /// Packets without a `btatt` layer map to `None` (the upstream filter).
    /// Packets that do carry one must have a frame layer with a parseable
    /// `frame.time_epoch`; anything else is a decoder fault.
    pub fn into_att_record(self) -> Result<Option<AttRecord>, Error> {
        let Some(btatt) = self.btatt else {
            return Ok(None);
        };

        let frame = self
            .frame
            .ok_or_else(|| Error::Decode("ATT packet is missing its frame layer".to_string()))?;
        let number = frame
            .number
            .into_inner()
            .ok_or_else(|| Error::Decode("ATT packet is missing frame.number".to_string()))?;
        let time_text = frame.time_epoch.into_inner().ok_or_else(|| {
            Error::Decode(format!("frame {}: missing frame.time_epoch", number))
        })?;
        let time: f64 = time_text.trim().parse().map_err(|_| {
            Error::Decode(format!(
                "frame {}: invalid frame.time_epoch \"{}\"",
                number, time_text
            ))
        })?;

        let link = self.btle.map(|btle| LinkContext {
            connection_handle: btle.connection_handle.into_inner(),
        });

        Ok(Some(AttRecord {
            time,
            frame: number,
            opcode: btatt.opcode.into_inner(),
            handle: btatt.handle.into_inner(),
            starting_handle: btatt.starting_handle.into_inner(),
            ending_handle: btatt.ending_handle.into_inner(),
            value: btatt.value.into_inner(),
            uuid: btatt
                .uuid16
                .into_inner()
                .or_else(|| btatt.uuid128.into_inner()),
            link,
        }))
    }
}

/// A tshark field value.
///
/// tshark emits a plain string for a field that occurs once and an array of
/// strings when the field repeats within a packet (e.g. every handle of a
/// read-by-type response); the first occurrence wins, matching how attribute
/// access behaves in the interactive dissector APIs. Numbers are accepted
/// and kept in string form.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FieldValue(Option<String>);

impl FieldValue {
    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    #[cfg(test)]
    pub fn some(text: &str) -> Self {
        FieldValue(Some(text.to_string()))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};
        use std::fmt;

        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a field value string, number, or array thereof")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue(Some(v.to_string())))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue(Some(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue(Some(v.to_string())))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue(Some(v.to_string())))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue(Some(v.to_string())))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue(None))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut first: Option<FieldValue> = None;
                while let Some(element) = seq.next_element::<FieldValue>()? {
                    if first.is_none() && element.0.is_some() {
                        first = Some(element);
                    }
                }
                Ok(first.unwrap_or_default())
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}
