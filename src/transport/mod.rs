//! Transport layer: query encoding and JSON decoding for SuperSMS.

mod detail;
mod query;

pub use detail::{
    TransportError, decode_code_detail_json, decode_number_detail_json,
    decode_release_detail_json,
};
pub use query::{
    apply_secret_key, encode_get_code_query, encode_get_number_query,
    encode_release_number_query,
};
