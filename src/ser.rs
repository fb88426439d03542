//! Serializers for fields without a string form of their own.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serializer;

use crate::field::{
    date::{format_date, format_date_time},
    hex::to_hex,
};

pub(crate) fn date<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_date(*d))
}

pub(crate) fn date_time<S: Serializer>(t: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_date_time(*t))
}

pub(crate) fn hex<S: Serializer, T: AsRef<[u8]>>(bytes: &T, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_hex(bytes.as_ref()))
}
